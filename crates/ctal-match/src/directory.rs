//! # Talent Directory
//!
//! The in-session list behind the public directory and the admin talent
//! table. It starts with the built-in fixture profile and appends every
//! approved record loaded from storage. Status and notes edits made from the
//! admin table live only in this list; they are not written back to storage.

use ctal_core::{ApplicationId, ClientRequirements, TalentFilters, TalentRecord, TalentStatus};

use crate::{filter, scoring};

/// In-memory talent list for one session.
#[derive(Debug, Clone)]
pub struct TalentDirectory {
    records: Vec<TalentRecord>,
}

impl TalentDirectory {
    /// A directory holding only the fixture profile.
    pub fn seeded() -> Self {
        Self {
            records: fixture(),
        }
    }

    /// The fixture profile followed by `approved`, renumbered after the fixture.
    pub fn with_approved(approved: Vec<TalentRecord>) -> Self {
        let mut records = fixture();
        let base = records.len() as u32;
        let loaded = approved.len();
        records.extend(approved.into_iter().enumerate().map(|(i, mut r)| {
            r.seq = base + i as u32 + 1;
            r.status = TalentStatus::Active;
            r
        }));
        tracing::debug!(count = loaded, "approved talent profiles loaded into directory");
        Self { records }
    }

    /// All records in current order.
    pub fn records(&self) -> &[TalentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its session number.
    pub fn get(&self, seq: u32) -> Option<&TalentRecord> {
        self.records.iter().find(|r| r.seq == seq)
    }

    /// Browse: apply the Filter Engine.
    pub fn search(&self, filters: &TalentFilters, search: &str) -> Vec<&TalentRecord> {
        filter::filter_talent(&self.records, filters, search)
    }

    /// Rescore every record against `requirements` and re-rank the list.
    pub fn find_matches(&mut self, requirements: &ClientRequirements) {
        scoring::find_matches(&mut self.records, requirements);
    }

    /// Set the status label of a record. Returns `false` if `seq` is unknown.
    pub fn update_status(&mut self, seq: u32, status: TalentStatus) -> bool {
        match self.records.iter_mut().find(|r| r.seq == seq) {
            Some(r) => {
                r.status = status;
                true
            }
            None => false,
        }
    }

    /// Replace the notes of a record. Returns `false` if `seq` is unknown.
    pub fn update_notes(&mut self, seq: u32, notes: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.seq == seq) {
            Some(r) => {
                r.notes = notes.into();
                true
            }
            None => false,
        }
    }
}

impl Default for TalentDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Fixed id of the fixture profile.
pub const FIXTURE_ID: ApplicationId = ApplicationId::from_u128(1);

fn fixture() -> Vec<TalentRecord> {
    vec![TalentRecord {
        id: FIXTURE_ID,
        seq: 1,
        name: "Pamela Williams".into(),
        photo: None,
        location: "New York, NY".into(),
        category: "Brand Strategy".into(),
        experience: "Advanced".into(),
        availability: "Immediate".into(),
        bio: "Strategic brand professional with 6+ years of experience in developing brand identities and compelling copy.".into(),
        skills: vec!["Brand Strategy".into(), "Copywriting".into()],
        portfolio: vec!["www.behance.net/pamela".into()],
        email: "pam@email.com".into(),
        status: TalentStatus::Active,
        notes: String::new(),
        match_score: 0,
        last_contact: "2025-05-01".into(),
    }]
}
