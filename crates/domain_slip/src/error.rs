//! Slip domain errors

use thiserror::Error;

use crate::slip::SlipId;

/// Errors surfaced by slip ports and the slip service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlipError {
    /// No slip exists with the given id
    #[error("slip {0} not found")]
    NotFound(SlipId),

    /// The backing store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the operation
    #[error("store error: {0}")]
    Storage(String),
}

impl SlipError {
    /// Creates a storage error from any displayable cause
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        SlipError::Storage(cause.to_string())
    }

    /// Checks if this error means the slip does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SlipError::NotFound(_))
    }
}
