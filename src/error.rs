//! Error types for queue operations.

use thiserror::Error;

/// Result type alias for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur while mutating a [`TextQueue`](crate::TextQueue).
///
/// No variant is ever produced after a partial mutation: a failed insert leaves the queue exactly as it was,
/// and a failed removal does not touch it at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The heap could not satisfy an allocation for a node, a value copy, or the queue itself.
    #[error("allocation failed")]
    AllocationFailure,

    /// A required argument was absent or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Removal was attempted on a queue with no elements.
    #[error("queue is empty")]
    EmptyContainer,
}

impl From<std::collections::TryReserveError> for QueueError {
    fn from(_: std::collections::TryReserveError) -> Self {
        QueueError::AllocationFailure
    }
}
