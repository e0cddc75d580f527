//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Benchmark Data - times a data-processing work unit once per input size
#[derive(Parser, Debug, Clone)]
#[command(name = "benchmark-data")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data file handed to the work unit [default: data/data_large.txt]
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Input sizes to label the runs with, comma-separated [default: 100000]
    #[arg(long, value_name = "N,...", value_delimiter = ',', value_parser = parse_size)]
    pub sizes: Vec<u64>,

    /// Keep automatic memory reclamation enabled during timed runs
    #[arg(long)]
    pub keep_gc: bool,

    /// Time an external program instead of the built-in line scan
    #[arg(long, value_name = "PROGRAM")]
    pub exec: Option<String>,

    /// Arguments for --exec; the data path is appended after them
    #[arg(last = true, requires = "exec", value_name = "ARGS")]
    pub exec_args: Vec<String>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output (run logs on stderr)
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output (JSON logs on stderr)
    #[arg(long)]
    pub debug: bool,

    /// Show supported environment variables and an example .env file, then exit
    #[arg(long)]
    pub env_help: bool,
}

impl Cli {
    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Command-line Overrides:\n");
        if let Some(ref data) = self.data {
            summary.push_str(&format!("  Data path: {}\n", data.display()));
        }
        if !self.sizes.is_empty() {
            let sizes: Vec<String> = self.sizes.iter().map(u64::to_string).collect();
            summary.push_str(&format!("  Sizes: {}\n", sizes.join(", ")));
        }
        if self.keep_gc {
            summary.push_str("  Memory reclamation: kept enabled\n");
        }
        if let Some(ref exec) = self.exec {
            summary.push_str(&format!("  Work command: {} {}\n", exec, self.exec_args.join(" ")));
        }
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

/// Parse one input size, rejecting zero
fn parse_size(s: &str) -> Result<u64, String> {
    let trimmed = s.trim();
    if trimmed.starts_with('+') || trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        return Err(format!("Invalid size: {}", s));
    }

    trimmed
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| format!("Invalid size: {}", s))
        .and_then(|size| {
            if size == 0 {
                Err("Size must be greater than 0".to_string())
            } else {
                Ok(size)
            }
        })
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert!(cli.data.is_none());
        assert!(cli.sizes.is_empty());
        assert!(!cli.keep_gc);
        assert!(cli.exec.is_none());
        assert!(cli.exec_args.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.env_help);
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from([
            "test",
            "--data", "fixtures/small.txt",
            "--sizes", "1000,100000",
            "--keep-gc",
            "--no-color",
            "--verbose",
            "--debug",
            "--exec", "ruby",
            "--", "task-1.rb", "--fast",
        ]);

        assert_eq!(cli.data, Some(PathBuf::from("fixtures/small.txt")));
        assert_eq!(cli.sizes, vec![1000, 100_000]);
        assert!(cli.keep_gc);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.debug);
        assert_eq!(cli.exec.as_deref(), Some("ruby"));
        assert_eq!(cli.exec_args, vec!["task-1.rb", "--fast"]);
    }

    #[test]
    fn test_repeated_sizes_flag_appends() {
        let cli = Cli::parse_from(["test", "--sizes", "10", "--sizes", "20,30"]);
        assert_eq!(cli.sizes, vec![10, 20, 30]);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!(parse_size("100000").unwrap(), 100_000);
        assert_eq!(parse_size("100_000").unwrap(), 100_000);
        assert_eq!(parse_size(" 5 ").unwrap(), 5);

        assert!(parse_size("0").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("-5").is_err());
        assert!(parse_size("+5").is_err());
        assert!(parse_size("0x10").is_err());
        assert!(parse_size("10.5").is_err());
        assert!(parse_size("abc").is_err());
    }

    #[test]
    fn test_invalid_size_rejected_by_clap() {
        assert!(Cli::try_parse_from(["test", "--sizes", "0"]).is_err());
        assert!(Cli::try_parse_from(["test", "--sizes", "ten"]).is_err());
    }

    #[test]
    fn test_exec_args_require_exec() {
        assert!(Cli::try_parse_from(["test", "--", "task-1.rb"]).is_err());
    }

    #[test]
    fn test_conflicting_color_flags() {
        assert!(Cli::try_parse_from(["test", "--color", "--no-color"]).is_err());
    }

    #[test]
    fn test_use_colors_method() {
        let cli = Cli::parse_from(["test", "--no-color"]);
        assert!(!cli.use_colors());

        let cli = Cli::parse_from(["test", "--color"]);
        assert!(cli.use_colors());

        // Depends on the environment, but must not panic
        let _ = Cli::parse_from(["test"]).use_colors();
    }

    #[test]
    fn test_config_summary() {
        let cli = Cli::parse_from(["test", "--sizes", "5,10", "--keep-gc", "--verbose"]);
        let summary = cli.get_config_summary();
        assert!(summary.contains("Sizes: 5, 10"));
        assert!(summary.contains("Memory reclamation: kept enabled"));
        assert!(summary.contains("Verbose mode: true"));
    }
}
