//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `nextdns_rewrites` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit code mapping
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use nextdns_rewrites::initialization::init_logger_with;
use nextdns_rewrites::{exit_code, run_sync, Config, Opt, SyncError, SyncReport};

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    let outcome = run_sync(config).await;
    let code = exit_code(fail_on, &outcome);

    match outcome {
        Ok(report) => print_report(&report),
        Err(SyncError::Aborted {
            name,
            detail,
            report,
        }) => {
            print_report(&report);
            eprintln!("nextdns_rewrites aborted on {}: {}", name, detail);
        }
        Err(e) => eprintln!("nextdns_rewrites error: {:#}", anyhow::Error::from(e)),
    }

    process::exit(code);
}

fn print_report(report: &SyncReport) {
    println!(
        "Profile {} ({}): {} rewrite{} processed, {} created, {} replaced, {} failed",
        report.profile.name,
        report.profile.id,
        report.desired,
        if report.desired == 1 { "" } else { "s" },
        report.created - report.replaced,
        report.replaced,
        report.failed
    );
}
