use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Which of the two sum implementations to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Closed form on the main task
    Sync,
    /// Cancellable loop on the blocking pool, with progress logging
    #[default]
    Async,
}

impl FromStr for RunMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            _ => Err(()),
        }
    }
}

/// Runner configuration, read from `SUM_*` environment variables
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub n: i32,
    pub mode: RunMode,
    /// Log every k-th progress snapshot; 0 runs without a progress sink
    pub progress_interval: u32,
    /// Cancel the background run once this much time has passed
    pub timeout: Option<Duration>,
    pub log_level: Level,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Required: the upper bound itself. Range checks are left to the library.
        let n = lookup("SUM_N")
            .context("SUM_N is not set")?
            .trim()
            .parse::<i32>()
            .context("SUM_N must be a 32-bit integer")?;

        // "sync" or "async", default is RunMode's #[default] (Async)
        let mode: RunMode = lookup("SUM_MODE")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let progress_interval = lookup("SUM_PROGRESS_INTERVAL")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10_000);

        let timeout = lookup("SUM_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis);

        let log_level = lookup("SUM_LOG_LEVEL")
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Ok(Self {
            n,
            mode,
            progress_interval,
            timeout,
            log_level,
        })
    }
}
