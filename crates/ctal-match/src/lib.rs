//! # ctal-match — Talent Search and Ranking
//!
//! Side-effect-free search over [`TalentRecord`](ctal_core::TalentRecord)
//! lists.
//!
//! - **Filter Engine** (`filter.rs`): conjunction of four field predicates and
//!   a free-text search over name, bio and skills. Preserves input order.
//! - **Match Scorer** (`scoring.rs`): additive fixed-weight score of one
//!   record against [`ClientRequirements`](ctal_core::ClientRequirements),
//!   plus the stable descending "Find Matches" ranking.
//! - **Spotlight** (`spotlight.rs`): the weekly rotation formula.
//! - **Directory** (`directory.rs`): the in-session talent list seeded with the
//!   fixture profile, with admin status/notes edits.
//!
//! Nothing in this crate touches storage; callers load records through
//! `ctal-state` and hand them in.

pub mod directory;
pub mod filter;
pub mod scoring;
pub mod spotlight;

pub use directory::{TalentDirectory, FIXTURE_ID};
pub use filter::{filter_talent, matches_filters, matches_search};
pub use scoring::{
    find_matches, rank_by_score, score, AVAILABILITY_WEIGHT, EXPERIENCE_WEIGHT, LOCATION_WEIGHT,
    POSITION_WEIGHT, SKILL_WEIGHT,
};
pub use spotlight::{spotlight_index, select_spotlight};
