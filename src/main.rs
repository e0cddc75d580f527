//! Benchmark Data - Main CLI Application
//!
//! Times a data-processing work unit once per input size with automatic memory
//! reclamation disabled and prints one completion line per run.

use benchmark_data::{
    cli::Cli,
    config::{display_config_summary, load_config, EnvManager},
    error::{AppError, Result},
    log_warn,
    logging::LoggerFactory,
    runner::BenchmarkRunner,
    BUILD_PROFILE, BUILD_TIME, GIT_COMMIT, PKG_NAME, TARGET_TRIPLE, VERSION,
};
use clap::Parser;
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();

    if cli.env_help {
        println!("{}", EnvManager::display_env_help());
        return;
    }

    let use_color = cli.use_colors();

    if let Err(e) = run_application(cli) {
        eprintln!("Error: {}", e.format_for_console(use_color));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        eprintln!(
            "{} v{} ({}, {} {}, built {})",
            PKG_NAME, VERSION, GIT_COMMIT, TARGET_TRIPLE, BUILD_PROFILE, BUILD_TIME
        );
        eprint!("{}", cli.get_config_summary());
    }

    let config = load_config(cli)?;
    colored::control::set_override(config.enable_color);

    let factory = LoggerFactory::new(config.clone());
    let logger = factory.create_logger("MAIN");

    if config.debug {
        logger
            .debug("Configuration loaded")
            .field("summary", display_config_summary(&config))
            .log();
    }

    for warning in EnvManager::validate_current_env() {
        log_warn!(logger, "{}", warning);
    }

    let mut runner = BenchmarkRunner::from_config(config).with_logger(factory.create_run_logger());
    let measurements = runner.run(std::io::stdout().lock())?;

    let total: f64 = measurements.iter().map(|m| m.elapsed_secs()).sum();
    logger
        .info(&format!("Completed {} timed run(s)", measurements.len()))
        .field("total_secs", total)
        .log();

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) | AppError::Parse(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Run with --env-help to list supported environment variables");
            eprintln!("  - Sizes must be positive integers, e.g. --sizes 1000,100000");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("I/O troubleshooting:");
            eprintln!("  - Check that the data file exists (default: data/data_large.txt)");
            eprintln!("  - Point at another file with --data <PATH>");
            eprintln!("  - For --exec, check that the program is on PATH");
        }
        _ => {}
    }
}
