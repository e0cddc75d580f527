use super::{WorkOptions, WorkReport, WorkUnit};
use crate::error::{AppError, Result};
use crate::reclaim;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streams the data file and tallies lines, bytes and comma-separated fields.
///
/// Every line gets its own buffer, handed to [`reclaim::release`] once
/// counted, so with reclamation disabled the whole file stays resident until
/// the guard is dropped.
#[derive(Debug, Default)]
pub struct LineScan {
    last: Option<WorkReport>,
}

impl LineScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report of the most recent successful run
    pub fn last_report(&self) -> Option<WorkReport> {
        self.last
    }
}

impl WorkUnit for LineScan {
    fn name(&self) -> &str {
        "scan"
    }

    fn run(&mut self, path: &Path, _options: &WorkOptions) -> Result<WorkReport> {
        let file = File::open(path)
            .map_err(|e| AppError::io(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        let mut report = WorkReport::default();

        loop {
            let mut line = Vec::new();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| AppError::io(format!("{}: {}", path.display(), e)))?;
            if read == 0 {
                break;
            }

            // Counting only needs bytes, so non-UTF-8 records are fine
            let mut content = line.as_slice();
            while let [rest @ .., b'\n' | b'\r'] = content {
                content = rest;
            }
            report.lines += 1;
            report.bytes += read as u64;
            if !content.is_empty() {
                report.fields += content.split(|&b| b == b',').count() as u64;
            }
            reclaim::release(line);
        }

        self.last = Some(report);
        Ok(report)
    }
}
