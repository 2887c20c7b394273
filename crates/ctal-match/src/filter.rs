//! # Filter Engine
//!
//! A record passes when every non-empty predicate holds:
//!
//! | Predicate | Rule |
//! |---|---|
//! | search | case-insensitive substring of name, bio, or any skill |
//! | category | exact equality |
//! | experience | exact equality |
//! | location | case-insensitive substring of the record location |
//! | availability | exact equality |

use ctal_core::{TalentFilters, TalentRecord};

/// Return the records passing `filters` and `search`, in input order.
pub fn filter_talent<'a>(
    talent: &'a [TalentRecord],
    filters: &TalentFilters,
    search: &str,
) -> Vec<&'a TalentRecord> {
    let needle = search.to_lowercase();
    talent
        .iter()
        .filter(|r| matches_lowered_search(r, &needle) && matches_filters(r, filters))
        .collect()
}

/// Free-text search predicate. An empty term matches everything.
pub fn matches_search(record: &TalentRecord, search: &str) -> bool {
    matches_lowered_search(record, &search.to_lowercase())
}

fn matches_lowered_search(record: &TalentRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.bio.to_lowercase().contains(needle)
        || record
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

/// Conjunction of the four field predicates.
pub fn matches_filters(record: &TalentRecord, filters: &TalentFilters) -> bool {
    (filters.category.is_empty() || record.category == filters.category)
        && (filters.experience.is_empty() || record.experience == filters.experience)
        && (filters.location.is_empty()
            || record
                .location
                .to_lowercase()
                .contains(&filters.location.to_lowercase()))
        && (filters.availability.is_empty() || record.availability == filters.availability)
}
