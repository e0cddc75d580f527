//! Configuration parsing from CLI arguments and environment variables

use crate::{cli::Cli, config::env::EnvManager, error::Result, models::Config, work::WorkKind};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        EnvManager::load_env_file(self.cli.debug)?;
        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config);

        config.validate()?;

        Ok(config)
    }

    /// Build configuration from defaults and CLI only, ignoring the environment
    pub fn parse_without_env(&self) -> Result<Config> {
        let mut config = Config::default();
        self.apply_cli_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref data) = self.cli.data {
            config.data_path = data.clone();
        }

        if !self.cli.sizes.is_empty() {
            config.sizes = self.cli.sizes.clone();
        }

        if self.cli.keep_gc {
            config.disable_gc = false;
        }

        if let Some(ref program) = self.cli.exec {
            config.work = WorkKind::Command {
                program: program.clone(),
                args: self.cli.exec_args.clone(),
            };
        }

        if self.cli.color {
            config.enable_color = true;
        } else if self.cli.no_color {
            config.enable_color = false;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let sizes: Vec<String> = config.sizes.iter().map(u64::to_string).collect();
    let work = match &config.work {
        WorkKind::Scan => "line scan".to_string(),
        WorkKind::Command { program, args } if args.is_empty() => program.clone(),
        WorkKind::Command { program, args } => format!("{} {}", program, args.join(" ")),
    };

    [
        format!("Data Path: {}", config.data_path.display()),
        format!("Sizes: {}", sizes.join(", ")),
        format!("Disable GC: {}", config.disable_gc),
        format!("Work: {}", work),
        format!("Color Output: {}", config.enable_color),
        format!("Verbose: {}", config.verbose),
        format!("Debug: {}", config.debug),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BENCH_DATA_PATH",
        "BENCH_SIZES",
        "BENCH_DISABLE_GC",
        "BENCH_EXEC",
        "ENABLE_COLOR",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_without_env_defaults() {
        let cli = Cli::parse_from(["test"]);
        let config = ConfigParser::new(cli).parse_without_env().unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/data_large.txt"));
        assert_eq!(config.sizes, vec![100_000]);
        assert!(config.disable_gc);
        assert_eq!(config.work, WorkKind::Scan);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "test",
            "--data", "small.txt",
            "--sizes", "1,2",
            "--keep-gc",
            "--no-color",
            "--verbose",
            "--exec", "ruby", "--", "task-1.rb",
        ]);
        let config = ConfigParser::new(cli).parse_without_env().unwrap();

        assert_eq!(config.data_path, PathBuf::from("small.txt"));
        assert_eq!(config.sizes, vec![1, 2]);
        assert!(!config.disable_gc);
        assert!(!config.enable_color);
        assert!(config.verbose);
        assert_eq!(
            config.work,
            WorkKind::Command {
                program: "ruby".to_string(),
                args: vec!["task-1.rb".to_string()],
            }
        );
    }

    #[test]
    fn test_env_vars_are_merged() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        env::set_var("BENCH_DATA_PATH", "env/data.txt");
        env::set_var("BENCH_SIZES", "10, 20");
        env::set_var("BENCH_DISABLE_GC", "false");
        env::set_var("BENCH_EXEC", "ruby task-1.rb");

        let mut config = Config::default();
        let result = config.merge_from_env();
        clear_env();
        result.unwrap();

        assert_eq!(config.data_path, PathBuf::from("env/data.txt"));
        assert_eq!(config.sizes, vec![10, 20]);
        assert!(!config.disable_gc);
        assert_eq!(
            config.work,
            WorkKind::Command {
                program: "ruby".to_string(),
                args: vec!["task-1.rb".to_string()],
            }
        );
    }

    #[test]
    fn test_invalid_env_value_is_config_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        env::set_var("BENCH_DISABLE_GC", "sometimes");
        let result = Config::default().merge_from_env();
        clear_env();

        let error = result.unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("BENCH_DISABLE_GC"));
    }

    #[test]
    fn test_quoted_exec_env_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        env::set_var("BENCH_EXEC", r#"ruby "my task.rb" --fast"#);
        let mut config = Config::default();
        let result = config.merge_from_env();
        clear_env();
        result.unwrap();

        assert_eq!(
            config.work,
            WorkKind::Command {
                program: "ruby".to_string(),
                args: vec!["my task.rb".to_string(), "--fast".to_string()],
            }
        );
    }

    #[test]
    fn test_blank_exec_env_var_is_config_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        env::set_var("BENCH_EXEC", "   ");
        let mut config = Config::default();
        let result = config.merge_from_env();
        clear_env();

        let error = result.unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("BENCH_EXEC cannot be empty"));
        assert_eq!(config.work, WorkKind::Scan);
    }

    #[test]
    fn test_cli_overrides_env_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_env();

        env::set_var("BENCH_SIZES", "8");
        let cli = Cli::parse_from(["test", "--sizes", "12"]);
        let result = ConfigParser::new(cli).parse();
        clear_env();

        assert_eq!(result.unwrap().sizes, vec![12]);
    }

    #[test]
    fn test_config_summary() {
        let summary = display_config_summary(&Config::default());

        assert!(summary.contains("Data Path: data/data_large.txt"));
        assert!(summary.contains("Sizes: 100000"));
        assert!(summary.contains("Disable GC: true"));
        assert!(summary.contains("Work: line scan"));
    }
}
