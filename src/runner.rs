//! Driver loop: one timed run per configured input size

use crate::error::Result;
use crate::harness::TimerHarness;
use crate::logging::RunLogger;
use crate::models::{Config, Measurement};
use crate::reclaim::ReclamationGuard;
use crate::work::{self, WorkOptions, WorkUnit};
use chrono::Utc;
use std::io::Write;

/// Runs the configured work unit once per input size through the harness
pub struct BenchmarkRunner {
    config: Config,
    work: Box<dyn WorkUnit>,
    logger: RunLogger,
}

impl BenchmarkRunner {
    pub fn new(config: Config, work: Box<dyn WorkUnit>) -> Self {
        let logger = RunLogger::new(&config);
        Self { config, work, logger }
    }

    /// Build the runner and its work unit from configuration
    pub fn from_config(config: Config) -> Self {
        let work = work::build(&config.work);
        Self::new(config, work)
    }

    /// Replace the run logger, e.g. to share a session ID
    pub fn with_logger(mut self, logger: RunLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Time every size in order, writing one completion line per run to `out`.
    ///
    /// Stops at the first failing run and returns its error unchanged.
    pub fn run<W: Write>(&mut self, out: W) -> Result<Vec<Measurement>> {
        let options = WorkOptions {
            disable_gc: self.config.disable_gc,
        };
        let mut harness = TimerHarness::new(out);
        let mut measurements = Vec::with_capacity(self.config.sizes.len());

        self.logger.log_batch_start(&self.config, self.work.name());

        for &size in &self.config.sizes {
            let label = size.to_string();
            let correlation_id = self.logger.logger().start_operation("timed_run");
            let started_at = Utc::now();

            // Dropped after the clock stops, so the parked-buffer sweep is not timed
            let guard = options.disable_gc.then(ReclamationGuard::disable);
            let path = &self.config.data_path;
            let work = &mut self.work;
            let outcome = harness.time_with_elapsed(&label, || work.run(path, &options));
            drop(guard);

            match outcome {
                Ok((report, elapsed)) => {
                    let measurement = Measurement::new(label, elapsed, started_at);
                    self.logger.log_measurement(&measurement, &report, &correlation_id);
                    self.logger.logger().end_operation(&correlation_id, "timed_run", true);
                    measurements.push(measurement);
                }
                Err(error) => {
                    self.logger.log_failure(&label, &error, &correlation_id);
                    self.logger.logger().end_operation(&correlation_id, "timed_run", false);
                    return Err(error);
                }
            }
        }

        Ok(measurements)
    }
}
