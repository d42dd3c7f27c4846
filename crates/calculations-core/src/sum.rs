use crate::cancellation::poll_cancellation;
use crate::error::SumError;
use crate::progress::{Progress, ProgressSink};
use tokio_util::sync::CancellationToken;
use tracing::debug;

fn validate(n: i32) -> Result<(), SumError> {
    if n <= 0 {
        return Err(SumError::InvalidArgument { n });
    }
    Ok(())
}

/// Calculates `1 + 2 + ... + n` with the closed form `(n + 1) * n / 2`
///
/// Both factors are widened to `i64` before multiplying, so every positive
/// `i32` fits (the largest result is `i32::MAX * (i32::MAX + 1) / 2`).
///
/// # Errors
///
/// [`SumError::InvalidArgument`] if `n <= 0`.
///
/// ```rust
/// use calculations_core::calculate_sum;
///
/// assert_eq!(calculate_sum(5).unwrap(), 15);
/// assert!(calculate_sum(0).is_err());
/// ```
pub fn calculate_sum(n: i32) -> Result<i64, SumError> {
    validate(n)?;
    let n = i64::from(n);
    Ok((n + 1) * n / 2)
}

/// Calculates `1 + 2 + ... + n` by iterating on a blocking worker
///
/// `n` is validated before anything is scheduled. The loop then runs on
/// tokio's blocking pool and polls `token` at the top of every iteration.
/// After adding `i`, the snapshot `(i, sum)` goes to `progress` if one was
/// given, so a full run reports exactly `n` snapshots with indices `1..=n`.
///
/// Cancellation is cooperative: a cancel requested mid-iteration is seen at
/// the next poll, and no snapshot is reported after it. A canceled run never
/// yields a partial sum. Dropping the returned future (a `timeout`, a losing
/// `select!` branch) stops the worker the same way, without canceling `token`.
///
/// # Errors
///
/// - [`SumError::InvalidArgument`] if `n <= 0`
/// - [`SumError::Canceled`] if `token` was canceled before the loop finished
/// - [`SumError::Worker`] if the worker did not complete, e.g. the sink panicked
///
/// # Example
///
/// ```rust
/// use calculations_core::{calculate_sum_async, CancellationToken, Progress};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), calculations_core::SumError> {
/// let token = CancellationToken::new();
/// let sum = calculate_sum_async(
///     100,
///     &token,
///     Some(Box::new(|p: Progress| {
///         if p.index % 25 == 0 {
///             println!("{}: {}", p.index, p.sum);
///         }
///     })),
/// )
/// .await?;
///
/// assert_eq!(sum, 5050);
/// # Ok(())
/// # }
/// ```
pub async fn calculate_sum_async(
    n: i32,
    token: &CancellationToken,
    progress: Option<Box<dyn ProgressSink>>,
) -> Result<i64, SumError> {
    validate(n)?;

    // The worker polls a child token: the caller's token still cancels it, and
    // dropping this future cancels only the child, stopping an unobserved worker
    let worker_token = token.child_token();
    let _worker_guard = worker_token.clone().drop_guard();
    debug!(n, with_progress = progress.is_some(), "Scheduling background sum");

    let sum = tokio::task::spawn_blocking(move || {
        accumulate(n, &worker_token, progress.as_deref())
    })
    .await??;

    debug!(n, sum, "Background sum completed");
    Ok(sum)
}

fn accumulate(
    n: i32,
    token: &CancellationToken,
    progress: Option<&dyn ProgressSink>,
) -> Result<i64, SumError> {
    let mut sum: i64 = 0;

    for i in 1..=n {
        poll_cancellation(token, i)?;

        sum += i64::from(i);

        if let Some(sink) = progress {
            sink.report(Progress { index: i, sum });
        }
    }

    Ok(sum)
}
