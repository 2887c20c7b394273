//! # Talent Records
//!
//! The display view of an application: the profile shown in the public
//! directory and in the admin review lists. Built from an
//! [`ApplicationSubmission`] by [`TalentRecord::from_submission`], which is
//! the single place the storage-to-display mapping lives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationSubmission;
use crate::identity::ApplicationId;

// ─── Talent Status ───────────────────────────────────────────────────

/// Workflow label attached to a talent record.
///
/// The label set is open: admins may set labels outside the known ones, which
/// are carried as [`TalentStatus::Custom`]. Serialized as the display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TalentStatus {
    /// Awaiting admin review.
    Pending,
    /// Approved and visible in the directory.
    Active,
    Reviewing,
    Shortlisted,
    Contacted,
    OnHold,
    /// Application was turned down.
    Rejected,
    /// Any other admin-entered label.
    Custom(String),
}

impl TalentStatus {
    /// The display label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Reviewing => "Reviewing",
            Self::Shortlisted => "Shortlisted",
            Self::Contacted => "Contacted",
            Self::OnHold => "On Hold",
            Self::Rejected => "Rejected",
            Self::Custom(label) => label,
        }
    }

    /// Map a label to a status. Unknown labels become `Custom`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Pending" => Self::Pending,
            "Active" => Self::Active,
            "Reviewing" => Self::Reviewing,
            "Shortlisted" => Self::Shortlisted,
            "Contacted" => Self::Contacted,
            "On Hold" => Self::OnHold,
            "Rejected" => Self::Rejected,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for TalentStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<TalentStatus> for String {
    fn from(status: TalentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TalentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Talent Record ───────────────────────────────────────────────────

/// A creative professional's profile as shown in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRecord {
    /// Durable id of the underlying application.
    pub id: ApplicationId,
    /// Session-local display number (`index + bucket offset`). Not stable
    /// across loads or bucket transitions.
    pub seq: u32,
    pub name: String,
    pub photo: Option<String>,
    /// Free-text `"City, Country"`.
    pub location: String,
    /// Free-text specialization label.
    pub category: String,
    /// Level label; an open set, compared by exact string equality.
    pub experience: String,
    pub availability: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub portfolio: Vec<String>,
    pub email: String,
    pub status: TalentStatus,
    /// Admin notes. Holds the rejection reason for rejected applications.
    pub notes: String,
    /// Recomputed on every match run.
    pub match_score: u32,
    /// `YYYY-MM-DD`.
    pub last_contact: String,
}

impl TalentRecord {
    /// Build the display view of a stored application.
    ///
    /// `last_contact` is stamped with `today`; `notes` carries the rejection
    /// reason when there is one.
    pub fn from_submission(
        submission: &ApplicationSubmission,
        status: TalentStatus,
        seq: u32,
        today: NaiveDate,
    ) -> Self {
        let portfolio = match submission.portfolio_url.trim() {
            "" => Vec::new(),
            url => vec![url.to_string()],
        };
        Self {
            id: submission.id,
            seq,
            name: submission.full_name(),
            photo: None,
            location: submission.location(),
            category: submission.specialization.clone(),
            experience: submission.experience_level.clone(),
            availability: submission.availability.clone(),
            bio: submission.bio.clone(),
            skills: submission.skills.clone(),
            portfolio,
            email: submission.email.clone(),
            status,
            notes: submission.rejection_reason.clone().unwrap_or_default(),
            match_score: 0,
            last_contact: today.format("%Y-%m-%d").to_string(),
        }
    }
}
