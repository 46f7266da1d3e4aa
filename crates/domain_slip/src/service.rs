//! Slip service
//!
//! The service sits between the HTTP layer and whichever [`SlipPort`] the
//! process was wired with. It forwards every call unchanged; rules that apply
//! to slips regardless of transport belong here.

use std::sync::Arc;

use tracing::debug;

use crate::error::SlipError;
use crate::ports::SlipPort;
use crate::slip::{Slip, SlipDraft, SlipId};

/// Application service for slips
#[derive(Clone)]
pub struct SlipService {
    port: Arc<dyn SlipPort>,
}

impl SlipService {
    /// Creates a service over the given port
    pub fn new(port: Arc<dyn SlipPort>) -> Self {
        Self { port }
    }

    /// Stores a new slip
    pub async fn create_slip(&self, draft: SlipDraft) -> Result<(), SlipError> {
        debug!(tags = draft.tags.len(), "creating slip");
        self.port.create_slip(draft).await
    }

    /// Fetches one slip
    pub async fn get_slip(&self, id: SlipId) -> Result<Slip, SlipError> {
        self.port.get_slip(id).await
    }

    /// Fetches every slip
    pub async fn get_all_slips(&self) -> Result<Vec<Slip>, SlipError> {
        self.port.get_all_slips().await
    }

    /// Replaces body and tags of slip `id`
    pub async fn update_slip(&self, id: SlipId, draft: SlipDraft) -> Result<(), SlipError> {
        debug!(id, "updating slip");
        self.port.update_slip(id, draft).await
    }

    /// Deletes slip `id`
    pub async fn delete_slip(&self, id: SlipId) -> Result<(), SlipError> {
        debug!(id, "deleting slip");
        self.port.delete_slip(id).await
    }

    /// Checks that the underlying store answers
    pub async fn health_check(&self) -> Result<(), SlipError> {
        self.port.health_check().await
    }
}

impl std::fmt::Debug for SlipService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlipService").finish_non_exhaustive()
    }
}
