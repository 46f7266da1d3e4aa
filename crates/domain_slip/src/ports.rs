//! Slip Domain Ports
//!
//! `SlipPort` is the repository capability set: everything the slip domain
//! needs from a store. The PostgreSQL adapter lives in `infra_db`; an
//! in-memory adapter for tests lives in [`mock`].

use async_trait::async_trait;

use crate::error::SlipError;
use crate::slip::{Slip, SlipDraft, SlipId};

/// Repository operations for slips
///
/// Each call maps to exactly one statement against the store. Adapters do
/// not retry and do not wrap calls in transactions.
#[async_trait]
pub trait SlipPort: Send + Sync {
    /// Inserts a new slip; the store assigns `id`, `created_at` and `updated_at`
    async fn create_slip(&self, draft: SlipDraft) -> Result<(), SlipError>;

    /// Retrieves a slip by id
    ///
    /// # Returns
    ///
    /// The slip if found, or `SlipError::NotFound`
    async fn get_slip(&self, id: SlipId) -> Result<Slip, SlipError>;

    /// Retrieves every slip, ordered by id. An empty store yields an empty vector.
    async fn get_all_slips(&self) -> Result<Vec<Slip>, SlipError>;

    /// Replaces body and tags of the slip with the given id
    ///
    /// Succeeds even when no slip matches.
    async fn update_slip(&self, id: SlipId, draft: SlipDraft) -> Result<(), SlipError>;

    /// Physically removes the slip with the given id
    ///
    /// Succeeds even when no slip matches.
    async fn delete_slip(&self, id: SlipId) -> Result<(), SlipError>;

    /// Verifies the store is reachable
    ///
    /// Adapters without an external store are always healthy.
    async fn health_check(&self) -> Result<(), SlipError> {
        Ok(())
    }
}

/// Mock adapter for testing
///
/// Stores slips in memory and assigns ids the way a sequence would, starting
/// at 1 and never reusing a value.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Debug, Default)]
    struct MockStore {
        slips: BTreeMap<SlipId, Slip>,
        last_id: SlipId,
    }

    /// In-memory implementation of SlipPort
    #[derive(Debug, Default)]
    pub struct MockSlipPort {
        store: RwLock<MockStore>,
    }

    impl MockSlipPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port with drafts, in order
        pub async fn with_drafts(drafts: Vec<SlipDraft>) -> Self {
            let port = Self::new();
            for draft in drafts {
                port.insert(draft).await;
            }
            port
        }

        /// Inserts a draft and returns the id it was given
        pub async fn insert(&self, draft: SlipDraft) -> SlipId {
            let mut store = self.store.write().await;
            store.last_id += 1;
            let id = store.last_id;
            let now = Utc::now();
            store.slips.insert(
                id,
                Slip {
                    id,
                    body: draft.body,
                    tags: draft.tags,
                    created_at: now,
                    updated_at: now,
                },
            );
            id
        }

        /// Number of slips currently stored
        pub async fn len(&self) -> usize {
            self.store.read().await.slips.len()
        }

        /// Checks whether the port holds no slips
        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    #[async_trait]
    impl SlipPort for MockSlipPort {
        async fn create_slip(&self, draft: SlipDraft) -> Result<(), SlipError> {
            self.insert(draft).await;
            Ok(())
        }

        async fn get_slip(&self, id: SlipId) -> Result<Slip, SlipError> {
            self.store
                .read()
                .await
                .slips
                .get(&id)
                .cloned()
                .ok_or(SlipError::NotFound(id))
        }

        async fn get_all_slips(&self) -> Result<Vec<Slip>, SlipError> {
            Ok(self.store.read().await.slips.values().cloned().collect())
        }

        async fn update_slip(&self, id: SlipId, draft: SlipDraft) -> Result<(), SlipError> {
            if let Some(slip) = self.store.write().await.slips.get_mut(&id) {
                slip.body = draft.body;
                slip.tags = draft.tags;
                slip.updated_at = Utc::now();
            }
            Ok(())
        }

        async fn delete_slip(&self, id: SlipId) -> Result<(), SlipError> {
            self.store.write().await.slips.remove(&id);
            Ok(())
        }
    }

}
