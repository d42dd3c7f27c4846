//! # Calculations Core
//!
//! Sum of the integers `1..=n`, computed two ways:
//!
//! - [`calculate_sum`]: closed form on the caller's thread
//! - [`calculate_sum_async`]: iterative loop on tokio's blocking pool, polling a
//!   [`CancellationToken`] every iteration and optionally reporting a
//!   [`Progress`] snapshot after each step
//!
//! Both reject `n <= 0` with [`SumError::InvalidArgument`] before doing any
//! work. A canceled background run ends in [`SumError::Canceled`] and never
//! returns a partial sum.
//!
//! ## Usage
//!
//! ```rust
//! use calculations_core::{calculate_sum, calculate_sum_async, CancellationToken, SumError};
//! use tokio::sync::mpsc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), SumError> {
//! assert_eq!(calculate_sum(5)?, 15);
//!
//! let token = CancellationToken::new();
//! let (tx, mut rx) = mpsc::unbounded_channel();
//!
//! let total = calculate_sum_async(10, &token, Some(Box::new(tx))).await?;
//! assert_eq!(total, 55);
//!
//! let mut last = None;
//! while let Some(progress) = rx.recv().await {
//!     last = Some(progress);
//! }
//! assert_eq!(last.map(|p| (p.index, p.sum)), Some((10, 55)));
//! # Ok(())
//! # }
//! ```

mod cancellation;
mod error;
mod progress;
mod sum;

pub use error::SumError;
pub use progress::{Progress, ProgressSink};
pub use sum::{calculate_sum, calculate_sum_async};

// Re-export CancellationToken for convenience
pub use tokio_util::sync::CancellationToken;
