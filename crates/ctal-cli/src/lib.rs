//! # ctal-cli — Talent Pool Command-Line Interface
//!
//! Drives the library crates against a file-backed store so the whole
//! intake and review workflow can be run from a terminal.
//!
//! ## Subcommands
//!
//! - `apply` — Submit a talent application.
//! - `talent` — Browse, match, feature and export the directory.
//! - `admin` — Log in/out and review pending applications.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `ctal-state` / `ctal-match`; no business rules here.

pub mod admin;
pub mod apply;
pub mod config;
pub mod talent;

use anyhow::{Context, Result};

use ctal_core::ApplicationId;
use ctal_state::{ApplicationRegistry, FileStore, LoadedApplications, LogNotifier};

pub use config::{CliConfig, ConfigError};

/// Open the configured data directory.
pub fn open_store(config: &CliConfig) -> Result<FileStore> {
    FileStore::open(&config.data_dir)
        .with_context(|| format!("failed to open data directory {}", config.data_dir.display()))
}

/// A registry over `store` that logs its notifications.
pub fn registry<'a>(config: &CliConfig, store: &'a FileStore) -> ApplicationRegistry<&'a FileStore, LogNotifier> {
    ApplicationRegistry::new(store, LogNotifier).with_config(config.notifications())
}

/// Resolve a user-supplied reference: a session `seq` number as shown by the
/// listing commands, or a full application id.
pub fn resolve_id(loaded: &LoadedApplications, reference: &str) -> Result<ApplicationId> {
    if let Ok(seq) = reference.trim().parse::<u32>() {
        let (_, record) = loaded
            .find_seq(seq)
            .with_context(|| format!("no application is listed as #{seq}"))?;
        return Ok(record.id);
    }
    reference
        .parse::<ApplicationId>()
        .with_context(|| format!("{reference:?} is neither a listing number nor an application id"))
}
