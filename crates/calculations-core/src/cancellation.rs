use crate::error::SumError;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Poll point at the top of iteration `index` of the background loop
///
/// Fails with [`SumError::Canceled`] once `token` is canceled. The log line
/// records how far the loop got; the partial sum itself is discarded.
pub(crate) fn poll_cancellation(token: &CancellationToken, index: i32) -> Result<(), SumError> {
    if token.is_cancelled() {
        info!(
            index,
            completed = index - 1,
            "Cancellation observed, abandoning background sum"
        );
        return Err(SumError::Canceled);
    }
    Ok(())
}
