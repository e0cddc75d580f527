//! Data models for the benchmark harness

pub mod config;
pub mod measurement;

// Re-export main model types
pub use config::Config;
pub use measurement::Measurement;
