use super::{WorkOptions, WorkReport, WorkUnit};
use crate::error::{AppError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an external program against the data file.
///
/// The program is invoked as `program args... <path>`. Its stdout is
/// discarded so the harness output stays one line per run; stderr is kept
/// for the failure message.
#[derive(Debug, Clone)]
pub struct CommandWork {
    program: String,
    args: Vec<String>,
}

impl CommandWork {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl WorkUnit for CommandWork {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&mut self, path: &Path, options: &WorkOptions) -> Result<WorkReport> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .env("BENCH_DISABLE_GC", options.disable_gc.to_string())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::io(format!("failed to start '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let status = match output.status.code() {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(if stderr.is_empty() {
                AppError::work(format!("'{}' failed with {}", self.program, status))
            } else {
                AppError::work(format!("'{}' failed with {}: {}", self.program, status, stderr))
            });
        }

        Ok(WorkReport {
            lines: output.stdout.iter().filter(|&&b| b == b'\n').count() as u64,
            bytes: output.stdout.len() as u64,
            fields: 0,
        })
    }
}
