//! # Spotlight Rotation
//!
//! The landing page features one approved talent per week. The featured
//! profile is chosen deterministically:
//!
//! ```text
//! index = (day_of_year0 / 7) mod approved_count
//! ```
//!
//! so every visitor sees the same profile for the same week. Caching of the
//! choice lives with the storage layer in `ctal-state`.

use ctal_core::{TalentRecord, Timestamp};

/// Index of the featured record, or `None` when there is nothing to feature.
pub fn spotlight_index(day_of_year0: u32, approved_count: usize) -> Option<usize> {
    if approved_count == 0 {
        return None;
    }
    Some((day_of_year0 / 7) as usize % approved_count)
}

/// The record featured in the week containing `now`.
pub fn select_spotlight(approved: &[TalentRecord], now: Timestamp) -> Option<&TalentRecord> {
    spotlight_index(now.day_of_year0(), approved.len()).and_then(|i| approved.get(i))
}
