//! # Application Identifiers
//!
//! Newtype wrapper for the durable application identifier. An id is minted
//! when an application is submitted and never changes afterwards, whichever
//! bucket the application ends up in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CtalError;

/// Durable identifier of one talent application.
///
/// The nil UUID is reserved as the "unassigned" marker for stored entries
/// that predate durable ids. Such entries are given a fresh id the first time
/// their bucket is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    /// Generate a new random application identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// A fixed id, for built-in fixture records.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// The placeholder id carried by entries that were stored without one.
    pub fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the placeholder id.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_nil()
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ApplicationId {
    type Err = CtalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix("application:").unwrap_or(raw);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| CtalError::InvalidIdentifier {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
