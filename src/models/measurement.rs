//! Result of one timed run

use crate::harness::format_completion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One completed, timed invocation of the work unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Label printed in front of the elapsed time (the input size)
    pub label: String,
    /// Wall-clock time of the single invocation
    pub elapsed: Duration,
    /// When the run started
    pub started_at: DateTime<Utc>,
}

impl Measurement {
    pub fn new(label: impl Into<String>, elapsed: Duration, started_at: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            elapsed,
            started_at,
        }
    }

    /// Elapsed wall-clock time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Elapsed wall-clock time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// The completion line exactly as the harness prints it
    pub fn completion_line(&self) -> String {
        format_completion(&self.label, self.elapsed)
    }
}
