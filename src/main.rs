//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_rater` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All rating logic is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use domain_rater::initialization::init_logger_with;
use domain_rater::{run, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out) {
        Ok(_) => {
            out.flush().context("Failed to flush output")?;
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_rater error: {:#}", e);
            process::exit(1);
        }
    }
}
