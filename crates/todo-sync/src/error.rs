//! Synchronizer errors

use thiserror::Error;

use crate::model::ListKind;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// A backend command failed; the reason is whatever the backend reported
    #[error("{command} failed: {reason}")]
    Backend {
        command: &'static str,
        reason: String,
    },

    /// Index does not address a task in the confirmed snapshot
    #[error("no {kind} task at position {index}")]
    NoSuchTask { kind: ListKind, index: usize },
}

impl SyncError {
    pub fn backend(command: &'static str, reason: impl Into<String>) -> Self {
        SyncError::Backend {
            command,
            reason: reason.into(),
        }
    }
}
