//! # Calculations
//!
//! Sum of the integers from 1 to n, either in closed form or as a cancellable
//! background loop that reports its progress.
//!
//! ## Quick Start
//!
//! ```rust
//! use calculations::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), SumError> {
//!     // 1. Closed form, on the current thread
//!     assert_eq!(calculate_sum(100_000)?, 5_000_050_000);
//!
//!     // 2. Background loop with a cancellation token and a progress sink
//!     let token = CancellationToken::new();
//!     let sink: Box<dyn ProgressSink> = Box::new(|p: Progress| {
//!         if p.index % 50_000 == 0 {
//!             println!("{} / 100000 (sum so far: {})", p.index, p.sum);
//!         }
//!     });
//!
//!     let total = calculate_sum_async(100_000, &token, Some(sink)).await?;
//!     assert_eq!(total, 5_000_050_000);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Core** (`calculations-core`): the two sum functions, progress sinks and
//!   the cancellation poll point
//! - **CLI** (`sum-cli`): the `sum-calc` binary, configured from environment
//!   variables

/// Re-export of the core library
pub use calculations_core as calculator;

/// Convenient re-exports of commonly used types
pub mod prelude {
    pub use crate::calculator::{calculate_sum, calculate_sum_async};

    pub use crate::calculator::{Progress, ProgressSink};

    pub use crate::calculator::{CancellationToken, SumError};
}
