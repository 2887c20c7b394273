//! # ctal CLI entry point
//!
//! Parses command-line arguments, loads configuration from the environment,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ctal_cli::admin::{run_admin, AdminArgs};
use ctal_cli::apply::{run_apply, ApplyArgs};
use ctal_cli::talent::{run_talent, TalentArgs};
use ctal_cli::CliConfig;

/// Talent pool toolkit.
///
/// Submit talent applications, browse and match the public directory, and
/// review pending applications as an admin.
#[derive(Parser, Debug)]
#[command(name = "ctal", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Data directory (overrides CTAL_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a talent application for review.
    Apply(ApplyArgs),

    /// Public directory: search, match, spotlight, export.
    Talent(TalentArgs),

    /// Admin review: login, list, stats, approve, reject.
    Admin(AdminArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let mut config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "ctal starting");

    let result = match cli.command {
        Commands::Apply(args) => run_apply(&args, &config),
        Commands::Talent(args) => run_talent(&args, &config),
        Commands::Admin(args) => run_admin(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
