//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `edge_cname_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Summary output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use edge_cname_audit::initialization::init_logger_with;
use edge_cname_audit::{exit_code, render_json, render_plain, run_audit, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so
    // AKAMAI_EDGERC and friends can be set per working directory
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let summary = match run_audit(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("edge_cname_audit error: {:#}", e);
            process::exit(1);
        }
    };

    match config.output_format {
        OutputFormat::Plain => print!("{}", render_plain(&summary)),
        OutputFormat::Json => {
            let json = render_json(&summary).context("Failed to serialize run summary")?;
            println!("{json}");
        }
    }

    let code = exit_code(config.fail_on, &summary);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
