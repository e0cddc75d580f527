//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::models::config::{parse_sizes, split_command};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Benchmark Data Configuration
#
# Values here are used as defaults and can be overridden by command-line
# arguments.

# Data file handed to the work unit
# BENCH_DATA_PATH=data/data_large.txt

# Input sizes; one timed run and one output line per entry (comma-separated)
# BENCH_SIZES=100000

# Disable automatic memory reclamation around each timed run (true/false)
# BENCH_DISABLE_GC=true

# Time an external program instead of the built-in line scan.
# The data path is appended as the last argument.
# BENCH_EXEC=ruby task-1.rb

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#
        .to_string()
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "BENCH_DATA_PATH" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("BENCH_DATA_PATH cannot be empty"));
                }
            }
            "BENCH_SIZES" => {
                let sizes = parse_sizes(value)
                    .map_err(|e| AppError::config(format!("Invalid BENCH_SIZES value '{}': {}", value, e)))?;
                if sizes.is_empty() || sizes.contains(&0) {
                    return Err(AppError::config(format!(
                        "BENCH_SIZES must list at least one size greater than 0, got: '{}'",
                        value
                    )));
                }
            }
            "BENCH_DISABLE_GC" | "ENABLE_COLOR" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            "BENCH_EXEC" => {
                let words = split_command(value)
                    .map_err(|e| AppError::config(format!("Invalid BENCH_EXEC value '{}': {}", value, e)))?;
                if words.is_empty() {
                    return Err(AppError::config("BENCH_EXEC cannot be empty"));
                }
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("BENCH_DATA_PATH", "Data file handed to the work unit", "data/data_large.txt"),
            ("BENCH_SIZES", "Comma-separated input sizes", "100000"),
            ("BENCH_DISABLE_GC", "Disable memory reclamation during runs", "true"),
            ("BENCH_EXEC", "External program to time instead of the line scan", "ruby task-1.rb"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<18} {}\n", var, description));
            help.push_str(&format!("  {:<18} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n\n");
        help.push_str("Example .env file:\n\n");
        help.push_str(&Self::create_example_env_content());

        help
    }

    /// Validate all currently set environment variables, returning warnings
    pub fn validate_current_env() -> Vec<String> {
        Self::get_supported_env_vars()
            .into_iter()
            .filter_map(|(var_name, _, _)| {
                let value = std::env::var(var_name).ok()?;
                Self::validate_env_var(var_name, &value)
                    .err()
                    .map(|e| format!("Warning: {}", e))
            })
            .collect()
    }
}
