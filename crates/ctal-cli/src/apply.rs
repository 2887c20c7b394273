//! # Apply Subcommand
//!
//! The intake form: collects one talent application from flags and submits
//! it to the pending bucket.

use anyhow::{bail, Result};
use clap::Args;

use ctal_core::application::split_tags;
use ctal_core::ApplicationSubmission;

use crate::config::CliConfig;

/// Arguments for the `ctal apply` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub country: String,
    /// Specialization, shown as the talent's category.
    #[arg(long, default_value = "")]
    pub specialization: String,
    /// Experience level (e.g. "Beginner", "Intermediate", "Advanced").
    #[arg(long, default_value = "")]
    pub experience_level: String,
    /// Availability (e.g. "Immediate", "Within 2 weeks").
    #[arg(long, default_value = "")]
    pub availability: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    /// Comma-separated skill tags.
    #[arg(long, default_value = "")]
    pub skills: String,
    #[arg(long, default_value = "")]
    pub portfolio_url: String,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    /// How the applicant heard about the agency.
    #[arg(long)]
    pub heard_from: Option<String>,
    /// Confirm acceptance of the terms and conditions.
    #[arg(long)]
    pub accept_terms: bool,
}

impl ApplyArgs {
    /// Build the submission the form would post.
    pub fn to_submission(&self) -> ApplicationSubmission {
        let opt = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        ApplicationSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            experience_level: self.experience_level.trim().to_string(),
            availability: self.availability.trim().to_string(),
            bio: self.bio.trim().to_string(),
            skills: split_tags(&self.skills),
            portfolio_url: self.portfolio_url.trim().to_string(),
            linkedin: opt(&self.linkedin),
            instagram: opt(&self.instagram),
            twitter: opt(&self.twitter),
            heard_from: opt(&self.heard_from),
            accept_terms: self.accept_terms,
            ..ApplicationSubmission::default()
        }
    }
}

/// Execute `ctal apply`.
pub fn run_apply(args: &ApplyArgs, config: &CliConfig) -> Result<u8> {
    if !args.accept_terms {
        bail!("the terms and conditions must be accepted (--accept-terms)");
    }
    for (flag, value) in [
        ("--first-name", &args.first_name),
        ("--last-name", &args.last_name),
        ("--email", &args.email),
    ] {
        if value.trim().is_empty() {
            bail!("{flag} must not be empty");
        }
    }

    let store = crate::open_store(config)?;
    let registry = crate::registry(config, &store);
    let submission = args.to_submission();
    let name = submission.full_name();
    let id = registry.submit(submission)?;
    println!("OK: application from {name} received ({id}); it is pending review");
    Ok(0)
}
