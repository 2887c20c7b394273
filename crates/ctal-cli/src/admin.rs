//! # Admin Subcommand
//!
//! The review workflow. `login`/`logout` toggle the admin flag in the store;
//! every other command refuses to run without it.
//!
//! Listing numbers (`#1000`, `#1001`, ...) are assigned on every load and
//! shift as applications move. `approve`/`reject` accept either a listing
//! number or the durable application id.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use ctal_state::{AdminGate, ApplicationState, FileStore};

use crate::config::CliConfig;
use crate::talent::summary_line;

/// Arguments for the `ctal admin` subcommand.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands.
#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Mark this data directory as admin-authenticated.
    Login,

    /// Clear the admin flag.
    Logout,

    /// List applications in one bucket (default: pending).
    List {
        #[arg(long, value_enum, default_value_t = Bucket::Pending)]
        bucket: Bucket,
    },

    /// Show per-bucket counts.
    Stats,

    /// Approve a pending application (PENDING → APPROVED).
    Approve {
        /// Listing number or application id.
        id: String,
    },

    /// Reject a pending application (PENDING → REJECTED).
    Reject {
        /// Listing number or application id.
        id: String,
        /// Reason passed on to the applicant.
        #[arg(long)]
        reason: Option<String>,
    },
}

/// Bucket selector for `admin list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Bucket {
    Pending,
    Approved,
    Rejected,
}

impl From<Bucket> for ApplicationState {
    fn from(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Pending => ApplicationState::Pending,
            Bucket::Approved => ApplicationState::Approved,
            Bucket::Rejected => ApplicationState::Rejected,
        }
    }
}

/// Execute an admin subcommand.
pub fn run_admin(args: &AdminArgs, config: &CliConfig) -> Result<u8> {
    let store = crate::open_store(config)?;
    let gate = AdminGate::new(&store);

    match &args.command {
        AdminCommand::Login => {
            gate.login().context("failed to record admin login")?;
            println!("OK: logged in as admin");
            return Ok(0);
        }
        AdminCommand::Logout => {
            gate.logout().context("failed to clear admin login")?;
            println!("OK: logged out");
            return Ok(0);
        }
        _ => {}
    }

    if !gate.is_authenticated() {
        bail!("admin access required; run `ctal admin login` first");
    }

    match &args.command {
        AdminCommand::List { bucket } => cmd_list((*bucket).into(), config, &store),
        AdminCommand::Stats => cmd_stats(config, &store),
        AdminCommand::Approve { id } => cmd_approve(id, config, &store),
        AdminCommand::Reject { id, reason } => cmd_reject(id, reason.as_deref(), config, &store),
        AdminCommand::Login | AdminCommand::Logout => Ok(0),
    }
}

fn cmd_list(state: ApplicationState, config: &CliConfig, store: &FileStore) -> Result<u8> {
    let loaded = crate::registry(config, store).load();
    let records = loaded.get(state);
    if records.is_empty() {
        println!("No {} applications.", state.as_str().to_lowercase());
        return Ok(0);
    }
    for record in records {
        println!("{}", summary_line(record));
        println!("        {} | {}", record.email, record.id);
        if !record.notes.is_empty() {
            println!("        Reason: {}", record.notes);
        }
    }
    Ok(0)
}

fn cmd_stats(config: &CliConfig, store: &FileStore) -> Result<u8> {
    let stats = crate::registry(config, store).stats();
    println!("Pending:  {}", stats.pending);
    println!("Approved: {}", stats.approved);
    println!("Rejected: {}", stats.rejected);
    println!("Total:    {}", stats.total());
    Ok(0)
}

fn cmd_approve(reference: &str, config: &CliConfig, store: &FileStore) -> Result<u8> {
    let registry = crate::registry(config, store);
    let id = crate::resolve_id(&registry.load(), reference)?;
    let record = registry.approve(id)?;
    println!("OK: {} approved and added to the talent pool", record.name);
    Ok(0)
}

fn cmd_reject(reference: &str, reason: Option<&str>, config: &CliConfig, store: &FileStore) -> Result<u8> {
    let registry = crate::registry(config, store);
    let id = crate::resolve_id(&registry.load(), reference)?;
    let record = registry.reject(id, reason)?;
    println!("OK: {} rejected", record.name);
    Ok(0)
}
