//! Benchmark Data
//!
//! A thin wall-clock timing harness. For every configured input size it runs
//! a data-processing work unit once against a fixed data file, with automatic
//! memory reclamation disabled, and prints one completion line per run.

pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod models;
pub mod reclaim;
pub mod runner;
pub mod work;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use harness::{format_completion, measure, time, TimerHarness};
pub use models::{Config, Measurement};
pub use reclaim::ReclamationGuard;
pub use runner::BenchmarkRunner;
pub use work::{CommandWork, LineScan, WorkKind, WorkOptions, WorkReport, WorkUnit};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: &str = env!("GIT_COMMIT");
pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_DATA_PATH: &str = "data/data_large.txt";
    pub const DEFAULT_SIZES: &[u64] = &[100_000];
    pub const DEFAULT_DISABLE_GC: bool = true;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
