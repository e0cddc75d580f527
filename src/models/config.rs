//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::work::WorkKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data file handed to the work unit
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Input sizes; one measured run (and one output line) per entry
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u64>,

    /// Disable automatic memory reclamation around each timed run
    #[serde(default = "default_disable_gc")]
    pub disable_gc: bool,

    /// Which work unit to time
    #[serde(default)]
    pub work: WorkKind,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            sizes: default_sizes(),
            disable_gc: default_disable_gc(),
            work: WorkKind::default(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(AppError::validation("Data path cannot be empty"));
        }

        if self.sizes.is_empty() {
            return Err(AppError::validation("At least one input size is required"));
        }

        if self.sizes.contains(&0) {
            return Err(AppError::validation("Input sizes must be greater than 0"));
        }

        if let WorkKind::Command { program, .. } = &self.work {
            if program.trim().is_empty() {
                return Err(AppError::validation("Work command program cannot be empty"));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(data_path) = std::env::var("BENCH_DATA_PATH") {
            self.data_path = PathBuf::from(data_path.trim());
        }

        if let Ok(sizes) = std::env::var("BENCH_SIZES") {
            self.sizes = parse_sizes(&sizes)
                .map_err(|e| AppError::config(format!("Invalid BENCH_SIZES value '{}': {}", sizes, e)))?;
        }

        if let Ok(disable_gc) = std::env::var("BENCH_DISABLE_GC") {
            self.disable_gc = disable_gc.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid BENCH_DISABLE_GC value '{}': {}", disable_gc, e)))?;
        }

        if let Ok(exec) = std::env::var("BENCH_EXEC") {
            let mut parts = split_command(&exec)
                .map_err(|e| AppError::config(format!("Invalid BENCH_EXEC value '{}': {}", exec, e)))?
                .into_iter();
            let program = parts
                .next()
                .ok_or_else(|| AppError::config("BENCH_EXEC cannot be empty"))?;
            self.work = WorkKind::Command {
                program,
                args: parts.collect(),
            };
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

/// Parse a comma-separated list of input sizes, e.g. `"1000, 100000"`.
pub fn parse_sizes(value: &str) -> Result<Vec<u64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.replace('_', "").parse::<u64>().map_err(AppError::from))
        .collect()
}

/// Split a command line on whitespace, honouring single and double quotes.
///
/// `ruby "my task.rb"` yields `["ruby", "my task.rb"]`. Quotes may appear
/// inside a word; an unterminated quote is an error.
pub fn split_command(value: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in value.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::parse(format!("unterminated {} quote", q)));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

// Default value functions for serde
fn default_data_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_DATA_PATH)
}

fn default_sizes() -> Vec<u64> {
    crate::defaults::DEFAULT_SIZES.to_vec()
}

fn default_disable_gc() -> bool {
    crate::defaults::DEFAULT_DISABLE_GC
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data_path, PathBuf::from("data/data_large.txt"));
        assert_eq!(config.sizes, vec![100_000]);
        assert!(config.disable_gc);
        assert_eq!(config.work, WorkKind::Scan);
    }

    #[test]
    fn test_empty_data_path_invalid() {
        let mut config = Config::default();
        config.data_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_sizes_invalid() {
        let mut config = Config::default();
        config.sizes.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_size_invalid() {
        let mut config = Config::default();
        config.sizes = vec![1000, 0];
        let error = config.validate().unwrap_err();
        assert_eq!(error.category(), "VALIDATION");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_blank_command_invalid() {
        let mut config = Config::default();
        config.work = WorkKind::Command {
            program: "  ".to_string(),
            args: vec![],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("100000").unwrap(), vec![100_000]);
        assert_eq!(parse_sizes("1000, 10_000,100000").unwrap(), vec![1000, 10_000, 100_000]);
        assert_eq!(parse_sizes("1,,2,").unwrap(), vec![1, 2]);
        assert!(parse_sizes("ten").is_err());
        assert!(parse_sizes("-5").is_err());
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("ruby task-1.rb").unwrap(), vec!["ruby", "task-1.rb"]);
        assert_eq!(split_command(r#"ruby "my task.rb" --fast"#).unwrap(), vec!["ruby", "my task.rb", "--fast"]);
        assert_eq!(split_command("sh -c 'exit 3'").unwrap(), vec!["sh", "-c", "exit 3"]);
        assert_eq!(split_command(r#"  prog  "" x"#).unwrap(), vec!["prog", "", "x"]);
        assert_eq!(split_command(r#"a"b c"d"#).unwrap(), vec!["ab cd"]);
        assert!(split_command("   ").unwrap().is_empty());
        assert!(split_command(r#"ruby "task.rb"#).is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"sizes": [10, 20]}"#).unwrap();
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.data_path, PathBuf::from("data/data_large.txt"));
        assert!(config.disable_gc);
        assert!(config.enable_color);
    }
}
