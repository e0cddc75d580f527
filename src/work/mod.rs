//! Work units timed by the harness
//!
//! A work unit receives the data file path and the reclamation option, the
//! same shape as `work(path, disable_gc: true)`. What it does with the file is
//! its own business; the harness only times it.

mod command;
mod scan;

pub use command::CommandWork;
pub use scan::LineScan;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options passed to every work unit call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOptions {
    /// The caller has switched automatic memory reclamation off for this call
    pub disable_gc: bool,
}

impl Default for WorkOptions {
    fn default() -> Self {
        Self {
            disable_gc: crate::defaults::DEFAULT_DISABLE_GC,
        }
    }
}

/// Informational summary of what a work unit processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkReport {
    pub lines: u64,
    pub bytes: u64,
    pub fields: u64,
}

/// A routine the harness can time
pub trait WorkUnit {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Process the data file once
    fn run(&mut self, path: &Path, options: &WorkOptions) -> Result<WorkReport>;
}

/// Work unit selection as it appears in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkKind {
    /// Built-in line scanner
    #[default]
    Scan,
    /// External program; the data path is appended as its last argument
    Command { program: String, args: Vec<String> },
}

/// Build the work unit described by `kind`
pub fn build(kind: &WorkKind) -> Box<dyn WorkUnit> {
    match kind {
        WorkKind::Scan => Box::new(LineScan::new()),
        WorkKind::Command { program, args } => Box::new(CommandWork::new(program.clone(), args.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_selects_work_unit() {
        assert_eq!(build(&WorkKind::Scan).name(), "scan");

        let command = WorkKind::Command {
            program: "wc".to_string(),
            args: vec!["-l".to_string()],
        };
        assert_eq!(build(&command).name(), "wc");
    }

    #[test]
    fn test_work_kind_serialization() {
        let json = serde_json::to_string(&WorkKind::Scan).unwrap();
        assert_eq!(json, r#"{"kind":"scan"}"#);

        let kind: WorkKind =
            serde_json::from_str(r#"{"kind":"command","program":"ruby","args":["task-1.rb"]}"#).unwrap();
        assert_eq!(
            kind,
            WorkKind::Command {
                program: "ruby".to_string(),
                args: vec!["task-1.rb".to_string()],
            }
        );
    }

    #[test]
    fn test_default_options_disable_gc() {
        assert!(WorkOptions::default().disable_gc);
    }
}
