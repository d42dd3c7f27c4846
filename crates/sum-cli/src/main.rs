// Command-line runner for calculations-core
//
// Reads its settings from SUM_* environment variables (see config.rs),
// prints the sum to stdout and logs to stderr.

mod config;

use anyhow::{anyhow, Context, Result};
use calculations_core::{
    calculate_sum, calculate_sum_async, CancellationToken, Progress, ProgressSink,
};
use config::{RunConfig, RunMode};
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let config = RunConfig::from_env()?;

    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!(
        "Computing sum 1..={} (mode: {:?}, progress_interval: {}, timeout: {:?})",
        config.n, config.mode, config.progress_interval, config.timeout
    );

    let sum = run(&config).await?;
    println!("{}", sum);

    Ok(())
}

async fn run(config: &RunConfig) -> Result<i64> {
    match config.mode {
        RunMode::Sync => calculate_sum(config.n).context("closed-form sum failed"),
        RunMode::Async => {
            let token = CancellationToken::new();
            let watcher = tokio::spawn(cancel_on_shutdown(token.clone(), config.timeout));

            let result = calculate_sum_async(
                config.n,
                &token,
                progress_logger(config.progress_interval, config.n),
            )
            .await;

            watcher.abort();
            result.context("background sum failed")
        }
    }
}

/// Sink that logs every `interval`-th snapshot, or no sink at all for 0
fn progress_logger(interval: u32, n: i32) -> Option<Box<dyn ProgressSink>> {
    if interval == 0 {
        return None;
    }
    // Intervals beyond i32::MAX behave like "only the last one"
    let interval = i32::try_from(interval).unwrap_or(i32::MAX);

    Some(Box::new(move |p: Progress| {
        if p.index % interval == 0 || p.index == n {
            info!("Progress: {}/{} (sum so far: {})", p.index, n, p.sum);
        }
    }))
}

/// Cancels `token` on Ctrl+C, SIGTERM, or when `timeout` elapses
async fn cancel_on_shutdown(token: CancellationToken, timeout: Option<Duration>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let deadline = async {
        match timeout {
            Some(timeout) => tokio::time::sleep(timeout).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C signal");
        },
        _ = terminate => {
            warn!("Received SIGTERM signal");
        },
        _ = deadline => {
            warn!("Timeout of {:?} elapsed", timeout.unwrap_or_default());
        },
    }

    info!("Cancelling background sum...");
    token.cancel();
}
