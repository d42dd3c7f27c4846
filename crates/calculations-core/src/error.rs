/// Errors returned by the sum operations
///
/// `Canceled` is kept apart from `Worker` so callers can tell a requested stop
/// from a computation that failed on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SumError {
    /// The upper bound must be at least 1
    #[error("n must be greater than zero, got {n}")]
    InvalidArgument { n: i32 },

    #[error("Operation has been canceled")]
    Canceled,

    /// The background worker did not run to completion (panicking sink, runtime shutdown)
    #[error("sum worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for SumError {
    fn from(e: tokio::task::JoinError) -> Self {
        SumError::Worker(e.to_string())
    }
}
