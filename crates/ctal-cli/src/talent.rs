//! # Talent Subcommand
//!
//! Public directory commands: browse with filters, rank against client
//! requirements, show the weekly spotlight, and export the directory.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ctal_core::{ClientRequirements, TalentFilters, TalentRecord, Timestamp};
use ctal_state::SpotlightCache;

use crate::config::CliConfig;

/// Arguments for the `ctal talent` subcommand.
#[derive(Args, Debug)]
pub struct TalentArgs {
    #[command(subcommand)]
    pub command: TalentCommand,
}

/// Talent subcommands.
#[derive(Subcommand, Debug)]
pub enum TalentCommand {
    /// Browse the directory with a free-text query and exact filters.
    Search(SearchArgs),

    /// Score every talent against client requirements, best first.
    Match(MatchArgs),

    /// Show this week's featured talent.
    Spotlight,

    /// Print the directory as JSON.
    Export,
}

/// Filters for `ctal talent search`. Empty values mean "any".
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Case-insensitive text matched against name, bio and skills.
    #[arg(long, short, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub experience: String,
    /// Substring of the talent's location.
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub availability: String,
}

/// Client requirements for `ctal talent match`.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    #[arg(long, default_value = "")]
    pub position: String,
    #[arg(long, default_value = "")]
    pub experience_level: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub availability: String,
    /// Comma-separated required skills.
    #[arg(long, default_value = "")]
    pub skills: String,
    /// Show at most this many results.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    pub fn filters(&self) -> TalentFilters {
        TalentFilters {
            category: self.category.clone(),
            experience: self.experience.clone(),
            location: self.location.clone(),
            availability: self.availability.clone(),
        }
    }
}

impl MatchArgs {
    pub fn requirements(&self) -> ClientRequirements {
        ClientRequirements {
            position: self.position.clone(),
            experience_level: self.experience_level.clone(),
            location: self.location.clone(),
            availability: self.availability.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Execute a talent subcommand.
pub fn run_talent(args: &TalentArgs, config: &CliConfig) -> Result<u8> {
    match &args.command {
        TalentCommand::Search(search) => cmd_search(search, config),
        TalentCommand::Match(requirements) => cmd_match(requirements, config),
        TalentCommand::Spotlight => cmd_spotlight(config),
        TalentCommand::Export => cmd_export(config),
    }
}

fn cmd_search(args: &SearchArgs, config: &CliConfig) -> Result<u8> {
    let store = crate::open_store(config)?;
    let directory = crate::registry(config, &store).directory();
    let hits = directory.search(&args.filters(), &args.query);

    tracing::debug!(total = directory.len(), hits = hits.len(), "directory search");
    if hits.is_empty() {
        println!("No talent matches the current filters.");
        return Ok(0);
    }
    for record in &hits {
        println!("{}", summary_line(record));
    }
    println!("{} of {} talent shown", hits.len(), directory.len());
    Ok(0)
}

fn cmd_match(args: &MatchArgs, config: &CliConfig) -> Result<u8> {
    let store = crate::open_store(config)?;
    let mut directory = crate::registry(config, &store).directory();
    directory.find_matches(&args.requirements());

    let limit = args.limit.unwrap_or(usize::MAX);
    for record in directory.records().iter().take(limit) {
        println!("{:>3}  {}", record.match_score, summary_line(record));
    }
    Ok(0)
}

fn cmd_spotlight(config: &CliConfig) -> Result<u8> {
    let store = crate::open_store(config)?;
    let approved = crate::registry(config, &store).load().approved;
    let featured = SpotlightCache::new(&store)
        .current(&approved, Timestamp::now())
        .context("failed to update the spotlight cache")?;

    match featured {
        Some(talent) => {
            println!("Talent of the week: {}", talent.name);
            println!("  {} | {} | {}", talent.category, talent.experience, talent.location);
            if !talent.bio.is_empty() {
                println!("  {}", talent.bio);
            }
            if !talent.skills.is_empty() {
                println!("  Skills: {}", talent.skills.join(", "));
            }
        }
        None => println!("No featured talent yet."),
    }
    Ok(0)
}

fn cmd_export(config: &CliConfig) -> Result<u8> {
    let store = crate::open_store(config)?;
    let directory = crate::registry(config, &store).directory();
    let json = serde_json::to_string_pretty(directory.records())
        .context("failed to serialize the directory")?;
    println!("{json}");
    Ok(0)
}

/// One-line listing used by the directory and admin views.
pub fn summary_line(record: &TalentRecord) -> String {
    format!(
        "#{:<5} {} | {} | {} | {} | {} [{}]",
        record.seq,
        record.name,
        record.category,
        record.experience,
        record.location,
        record.availability,
        record.status,
    )
}
