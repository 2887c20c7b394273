//! # Application Lifecycle State Machine
//!
//! ## States
//!
//! ```text
//! PENDING ──▶ APPROVED  (terminal)
//!    │
//!    └──────▶ REJECTED  (terminal)
//! ```
//!
//! There is no path back to PENDING and no path between the two terminal
//! states. Each state owns one storage bucket.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ctal_core::{ApplicationId, TalentStatus};

use crate::store::StoreError;

// ─── Application State ───────────────────────────────────────────────

/// The lifecycle state of an application, one per storage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    /// Submitted, awaiting admin review.
    Pending,
    /// Accepted into the talent pool (terminal).
    Approved,
    /// Turned down (terminal).
    Rejected,
}

impl ApplicationState {
    /// All states, in the order buckets are loaded.
    pub const ALL: [ApplicationState; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// The canonical string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Store key of the bucket holding applications in this state.
    pub fn bucket_key(&self) -> &'static str {
        match self {
            Self::Pending => "pendingTalentApplications",
            Self::Approved => "talentApplications",
            Self::Rejected => "rejectedTalentApplications",
        }
    }

    /// Nominal offset added to the index of an entry to form its display
    /// `seq`. See `BucketStats::seq_base` for how large buckets shift it.
    pub fn seq_offset(&self) -> u32 {
        match self {
            Self::Pending => 1000,
            Self::Approved => 1,
            Self::Rejected => 2000,
        }
    }

    /// Status label given to display records loaded from this bucket.
    pub fn display_status(&self) -> TalentStatus {
        match self {
            Self::Pending => TalentStatus::Pending,
            Self::Approved => TalentStatus::Active,
            Self::Rejected => TalentStatus::Rejected,
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Valid target states from this state.
    pub fn valid_transitions(&self) -> &'static [ApplicationState] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    /// Validate a transition to `target`.
    pub fn check_transition(&self, target: ApplicationState) -> Result<(), LifecycleError> {
        if self.valid_transitions().contains(&target) {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Parse a state name, case-insensitively. Accepts the bucket names
    /// `pending`, `approved`, `rejected`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during lifecycle operations.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// No bucket holds an application with this id.
    #[error("application {id} not found")]
    NotFound {
        /// The requested id.
        id: ApplicationId,
    },

    /// Attempted transition is not valid from the current state.
    #[error("invalid application transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: ApplicationState,
        /// Attempted target state.
        to: ApplicationState,
    },

    /// A bucket that must be rewritten could not be decoded.
    #[error("bucket {key} is not a valid application list: {source}")]
    CorruptBucket {
        /// Bucket key.
        key: &'static str,
        /// Decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_reach_both_terminal_states() {
        assert!(ApplicationState::Pending
            .check_transition(ApplicationState::Approved)
            .is_ok());
        assert!(ApplicationState::Pending
            .check_transition(ApplicationState::Rejected)
            .is_ok());
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for terminal in [ApplicationState::Approved, ApplicationState::Rejected] {
            assert!(terminal.is_terminal());
            assert!(terminal.valid_transitions().is_empty());
            for target in ApplicationState::ALL {
                let err = terminal.check_transition(target).unwrap_err();
                assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
            }
        }
    }

    #[test]
    fn pending_cannot_stay_pending() {
        assert!(ApplicationState::Pending
            .check_transition(ApplicationState::Pending)
            .is_err());
    }

    #[test]
    fn bucket_keys_and_offsets() {
        assert_eq!(ApplicationState::Pending.bucket_key(), "pendingTalentApplications");
        assert_eq!(ApplicationState::Approved.bucket_key(), "talentApplications");
        assert_eq!(ApplicationState::Rejected.bucket_key(), "rejectedTalentApplications");
        assert_eq!(ApplicationState::Pending.seq_offset(), 1000);
        assert_eq!(ApplicationState::Approved.seq_offset(), 1);
        assert_eq!(ApplicationState::Rejected.seq_offset(), 2000);
    }

    #[test]
    fn display_statuses() {
        assert_eq!(ApplicationState::Pending.display_status(), TalentStatus::Pending);
        assert_eq!(ApplicationState::Approved.display_status(), TalentStatus::Active);
        assert_eq!(ApplicationState::Rejected.display_status(), TalentStatus::Rejected);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ApplicationState::from_name("approved"), Some(ApplicationState::Approved));
        assert_eq!(ApplicationState::from_name("REJECTED"), Some(ApplicationState::Rejected));
        assert_eq!(ApplicationState::from_name("active"), None);
    }

    #[test]
    fn error_messages_name_both_states() {
        let err = ApplicationState::Approved
            .check_transition(ApplicationState::Rejected)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid application transition: APPROVED -> REJECTED");
    }
}
