//! # Cached Spotlight
//!
//! Wraps the weekly rotation of `ctal_match::spotlight` with the cache the
//! landing page keeps in the store:
//!
//! - `spotlightTalent`: JSON of the featured [`TalentRecord`].
//! - `spotlightTimestamp`: epoch milliseconds of the last refresh, as a
//!   decimal string.
//!
//! The cached profile is served until seven days have passed since the
//! refresh; then the formula is applied again and the cache rewritten.

use ctal_core::{TalentRecord, Timestamp};

use crate::store::{KeyValueStore, StoreError};

pub const SPOTLIGHT_TALENT_KEY: &str = "spotlightTalent";
pub const SPOTLIGHT_TIMESTAMP_KEY: &str = "spotlightTimestamp";
/// Seven days.
pub const SPOTLIGHT_REFRESH_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

/// The featured-talent cache.
#[derive(Debug)]
pub struct SpotlightCache<S> {
    store: S,
}

impl<S: KeyValueStore> SpotlightCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The talent to feature at `now`, chosen from `approved`.
    ///
    /// Returns `None` without touching the cache when nothing is approved.
    /// An unreadable cache is ignored and rebuilt.
    pub fn current(
        &self,
        approved: &[TalentRecord],
        now: Timestamp,
    ) -> Result<Option<TalentRecord>, StoreError> {
        if approved.is_empty() {
            return Ok(None);
        }
        if let Some(cached) = self.cached(now) {
            return Ok(Some(cached));
        }

        let Some(chosen) = ctal_match::select_spotlight(approved, now).cloned() else {
            return Ok(None);
        };
        let json = serde_json::to_vec(&chosen).map_err(|source| StoreError::Encode {
            key: SPOTLIGHT_TALENT_KEY.to_string(),
            source,
        })?;
        self.store.set(SPOTLIGHT_TALENT_KEY, &json)?;
        self.store
            .set(SPOTLIGHT_TIMESTAMP_KEY, now.epoch_millis().to_string().as_bytes())?;
        tracing::debug!(id = %chosen.id, name = %chosen.name, "spotlight refreshed");
        Ok(Some(chosen))
    }

    /// Drop the cached choice so the next call recomputes it.
    pub fn invalidate(&self) -> Result<(), StoreError> {
        self.store.remove(SPOTLIGHT_TALENT_KEY)?;
        self.store.remove(SPOTLIGHT_TIMESTAMP_KEY)
    }

    fn cached(&self, now: Timestamp) -> Option<TalentRecord> {
        let stamp = self.store.get(SPOTLIGHT_TIMESTAMP_KEY).ok()??;
        let refreshed: i64 = std::str::from_utf8(&stamp).ok()?.trim().parse().ok()?;
        if now.epoch_millis().saturating_sub(refreshed) >= SPOTLIGHT_REFRESH_MILLIS {
            return None;
        }
        let talent = self.store.get(SPOTLIGHT_TALENT_KEY).ok()??;
        match serde_json::from_slice(&talent) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable spotlight cache");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use ctal_core::{ApplicationId, TalentStatus};

    fn rec(name: &str) -> TalentRecord {
        TalentRecord {
            id: ApplicationId::new(),
            seq: 1,
            name: name.into(),
            photo: None,
            location: "Lagos, Nigeria".into(),
            category: "Graphic Design".into(),
            experience: "Advanced".into(),
            availability: "Immediate".into(),
            bio: String::new(),
            skills: vec!["Illustrator".into()],
            portfolio: Vec::new(),
            email: format!("{name}@example.com"),
            status: TalentStatus::Active,
            notes: String::new(),
            match_score: 0,
            last_contact: "2026-10-19".into(),
        }
    }

    fn at(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn nothing_approved_leaves_cache_alone() {
        let store = MemoryStore::new();
        let cache = SpotlightCache::new(&store);
        assert!(cache.current(&[], Timestamp::now()).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn out_of_range_timestamp_counts_as_stale() {
        let store = MemoryStore::new();
        let cache = SpotlightCache::new(&store);
        let stale = rec("Stale");
        store
            .set(SPOTLIGHT_TALENT_KEY, &serde_json::to_vec(&stale).unwrap())
            .unwrap();
        store
            .set(SPOTLIGHT_TIMESTAMP_KEY, i64::MIN.to_string().as_bytes())
            .unwrap();

        let fresh = rec("Fresh");
        let now = at("2026-10-19T09:00:00Z");
        let chosen = cache.current(std::slice::from_ref(&fresh), now).unwrap().unwrap();
        assert_eq!(chosen.name, "Fresh");
        assert_eq!(
            store.get(SPOTLIGHT_TIMESTAMP_KEY).unwrap().unwrap(),
            now.epoch_millis().to_string().into_bytes()
        );
    }

    #[test]
    fn single_talent_is_always_featured() {
        let store = MemoryStore::new();
        let cache = SpotlightCache::new(&store);
        let only = vec![rec("amara")];
        for day in ["2026-01-01T00:00:00Z", "2026-03-15T00:00:00Z", "2026-12-31T00:00:00Z"] {
            cache.invalidate().unwrap();
            assert_eq!(cache.current(&only, at(day)).unwrap().unwrap().name, "amara");
        }
    }

    #[test]
    fn cached_choice_is_served_within_seven_days() {
        let store = MemoryStore::new();
        let cache = SpotlightCache::new(&store);
        let approved = vec![rec("a"), rec("b"), rec("c")];

        // Day 0 -> index 0.
        let first = cache.current(&approved, at("2026-01-01T12:00:00Z")).unwrap().unwrap();
        assert_eq!(first.name, "a");

        // Day 8 would pick index 1, but the cache is six days old.
        let later = cache.current(&approved, at("2026-01-07T12:00:00Z")).unwrap().unwrap();
        assert_eq!(later.name, "a");

        // Exactly seven days later the cache expires; day 7 -> index 1.
        let refreshed = cache.current(&approved, at("2026-01-08T12:00:00Z")).unwrap().unwrap();
        assert_eq!(refreshed.name, "b");
        assert_eq!(
            store.get(SPOTLIGHT_TIMESTAMP_KEY).unwrap().unwrap(),
            at("2026-01-08T12:00:00Z").epoch_millis().to_string().into_bytes()
        );
    }

    #[test]
    fn garbage_cache_is_rebuilt() {
        let store = MemoryStore::new();
        store.set(SPOTLIGHT_TIMESTAMP_KEY, b"not-a-number").unwrap();
        store.set(SPOTLIGHT_TALENT_KEY, b"{}").unwrap();
        let cache = SpotlightCache::new(&store);

        let chosen = cache.current(&[rec("z")], at("2026-05-05T00:00:00Z")).unwrap().unwrap();
        assert_eq!(chosen.name, "z");
        let stored: TalentRecord =
            serde_json::from_slice(&store.get(SPOTLIGHT_TALENT_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, chosen);
    }
}
