//! # Application Registry
//!
//! The lifecycle store: every operation that reads or moves applications
//! between buckets goes through [`ApplicationRegistry`].
//!
//! ## Read policy
//!
//! - **Display reads** (`load`, `bucket`, `stats`) are lenient. An
//!   unreadable or malformed bucket is logged and treated as empty.
//! - **Rewrites** (`submit`, `approve`, `reject`) read strictly. A malformed
//!   bucket aborts the operation with [`LifecycleError::CorruptBucket`]
//!   instead of being overwritten.
//!
//! Entries stored without an id are assigned one on first read and the
//! bucket is re-encoded, so the id is durable from then on.
//!
//! ## Transition write order
//!
//! A transition writes the destination bucket before the pending bucket. If
//! the second write fails the application shows up in both buckets rather
//! than in neither.

use ctal_core::{ApplicationId, ApplicationSubmission, TalentRecord, Timestamp};
use ctal_match::TalentDirectory;

use crate::lifecycle::{ApplicationState, LifecycleError};
use crate::notify::{Notification, NotificationConfig, Notifier};
use crate::store::KeyValueStore;

/// Number of applications per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl BucketStats {
    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }

    /// First display `seq` of `state`'s bucket in a loaded set of this size.
    ///
    /// Buckets start at their nominal offsets (approved 1, pending 1000,
    /// rejected 2000). A bucket that outgrows its range pushes the next one
    /// up so the ranges never overlap.
    pub fn seq_base(&self, state: ApplicationState) -> u32 {
        let approved = ApplicationState::Approved.seq_offset();
        let pending = ApplicationState::Pending
            .seq_offset()
            .max(approved.saturating_add(self.approved as u32));
        let rejected = ApplicationState::Rejected
            .seq_offset()
            .max(pending.saturating_add(self.pending as u32));
        match state {
            ApplicationState::Approved => approved,
            ApplicationState::Pending => pending,
            ApplicationState::Rejected => rejected,
        }
    }
}

/// Display records decoded from all three buckets.
#[derive(Debug, Clone, Default)]
pub struct LoadedApplications {
    pub pending: Vec<TalentRecord>,
    pub approved: Vec<TalentRecord>,
    pub rejected: Vec<TalentRecord>,
}

impl LoadedApplications {
    /// Records of one bucket.
    pub fn get(&self, state: ApplicationState) -> &[TalentRecord] {
        match state {
            ApplicationState::Pending => &self.pending,
            ApplicationState::Approved => &self.approved,
            ApplicationState::Rejected => &self.rejected,
        }
    }

    /// Find a record by its session `seq` number.
    pub fn find_seq(&self, seq: u32) -> Option<(ApplicationState, &TalentRecord)> {
        ApplicationState::ALL
            .into_iter()
            .find_map(|s| self.get(s).iter().find(|r| r.seq == seq).map(|r| (s, r)))
    }

    /// Find a record by its durable id.
    pub fn find_id(&self, id: ApplicationId) -> Option<(ApplicationState, &TalentRecord)> {
        ApplicationState::ALL
            .into_iter()
            .find_map(|s| self.get(s).iter().find(|r| r.id == id).map(|r| (s, r)))
    }

    pub fn stats(&self) -> BucketStats {
        BucketStats {
            pending: self.pending.len(),
            approved: self.approved.len(),
            rejected: self.rejected.len(),
        }
    }
}

/// Lifecycle store over an injected key-value store and notifier.
#[derive(Debug)]
pub struct ApplicationRegistry<S, N> {
    store: S,
    notifier: N,
    config: NotificationConfig,
}

impl<S: KeyValueStore, N: Notifier> ApplicationRegistry<S, N> {
    /// Create a registry with the default notification config.
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            config: NotificationConfig::default(),
        }
    }

    /// Replace the notification config.
    pub fn with_config(mut self, config: NotificationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Append a new application to the pending bucket.
    ///
    /// Mints an id if the submission has none and stamps `submitted_at`.
    /// Emails are not deduplicated.
    pub fn submit(&self, mut submission: ApplicationSubmission) -> Result<ApplicationId, LifecycleError> {
        if submission.id.is_unassigned() {
            submission.id = ApplicationId::new();
        }
        submission.submitted_at.get_or_insert_with(Timestamp::now);
        submission.rejection_reason = None;
        let id = submission.id;

        let mut pending = self.read_strict(ApplicationState::Pending)?;
        pending.push(submission);
        self.write(ApplicationState::Pending, &pending)?;

        tracing::info!(%id, pending = pending.len(), "application submitted");
        Ok(id)
    }

    /// Move a pending application to the approved bucket.
    pub fn approve(&self, id: ApplicationId) -> Result<TalentRecord, LifecycleError> {
        let record = self.transition(id, ApplicationState::Approved, None)?;
        for n in self.config.approval_messages(&record) {
            self.deliver(&n);
        }
        Ok(record)
    }

    /// Move a pending application to the rejected bucket, recording `reason`.
    ///
    /// A blank reason is treated as no reason.
    pub fn reject(&self, id: ApplicationId, reason: Option<&str>) -> Result<TalentRecord, LifecycleError> {
        let reason = reason.map(str::trim).filter(|r| !r.is_empty());
        let record = self.transition(id, ApplicationState::Rejected, reason)?;
        for n in self.config.rejection_messages(&record, reason) {
            self.deliver(&n);
        }
        Ok(record)
    }

    /// Decode all three buckets into display records, stamped with today's date.
    pub fn load(&self) -> LoadedApplications {
        self.load_at(Timestamp::now())
    }

    /// [`load`](Self::load) with an explicit clock.
    pub fn load_at(&self, now: Timestamp) -> LoadedApplications {
        let today = now.date();
        let pending = self.read_lenient(ApplicationState::Pending);
        let approved = self.read_lenient(ApplicationState::Approved);
        let rejected = self.read_lenient(ApplicationState::Rejected);
        let stats = BucketStats {
            pending: pending.len(),
            approved: approved.len(),
            rejected: rejected.len(),
        };
        let display = |state: ApplicationState, entries: &[ApplicationSubmission]| -> Vec<TalentRecord> {
            let base = stats.seq_base(state);
            entries
                .iter()
                .enumerate()
                .map(|(i, app)| TalentRecord::from_submission(app, state.display_status(), base + i as u32, today))
                .collect()
        };
        LoadedApplications {
            pending: display(ApplicationState::Pending, &pending),
            approved: display(ApplicationState::Approved, &approved),
            rejected: display(ApplicationState::Rejected, &rejected),
        }
    }

    /// Raw entries of one bucket. Unreadable buckets read as empty.
    pub fn bucket(&self, state: ApplicationState) -> Vec<ApplicationSubmission> {
        self.read_lenient(state)
    }

    /// Per-bucket counts for the admin dashboard.
    pub fn stats(&self) -> BucketStats {
        BucketStats {
            pending: self.read_lenient(ApplicationState::Pending).len(),
            approved: self.read_lenient(ApplicationState::Approved).len(),
            rejected: self.read_lenient(ApplicationState::Rejected).len(),
        }
    }

    /// Which bucket currently holds `id`, if any.
    pub fn locate(&self, id: ApplicationId) -> Option<ApplicationState> {
        ApplicationState::ALL
            .into_iter()
            .find(|s| self.read_lenient(*s).iter().any(|a| a.id == id))
    }

    /// The public directory: fixture profile plus every approved record.
    pub fn directory(&self) -> TalentDirectory {
        TalentDirectory::with_approved(self.load().approved)
    }

    // ── Internals ────────────────────────────────────────────────────

    fn transition(
        &self,
        id: ApplicationId,
        target: ApplicationState,
        reason: Option<&str>,
    ) -> Result<TalentRecord, LifecycleError> {
        let mut pending = self.read_strict(ApplicationState::Pending)?;
        let Some(pos) = pending.iter().position(|a| a.id == id) else {
            return Err(match self.locate(id) {
                Some(current) => match current.check_transition(target) {
                    Err(e) => e,
                    Ok(()) => LifecycleError::NotFound { id },
                },
                None => LifecycleError::NotFound { id },
            });
        };
        ApplicationState::Pending.check_transition(target)?;

        let mut entry = pending.remove(pos);
        entry.rejection_reason = reason.map(str::to_string);

        let mut destination = self.read_strict(target)?;
        destination.push(entry.clone());
        self.write(target, &destination)?;
        self.write(ApplicationState::Pending, &pending)?;

        let seq = self.stats().seq_base(target) + (destination.len() - 1) as u32;
        let record =
            TalentRecord::from_submission(&entry, target.display_status(), seq, Timestamp::now().date());

        tracing::info!(
            %id,
            from = %ApplicationState::Pending,
            to = %target,
            email = %record.email,
            "application transitioned"
        );
        Ok(record)
    }

    fn deliver(&self, notification: &Notification) {
        if let Err(e) = self.notifier.send(notification) {
            tracing::warn!(
                notifier = self.notifier.notifier_name(),
                subject = %notification.subject,
                error = %e,
                "notification not delivered"
            );
        }
    }

    fn read_strict(&self, state: ApplicationState) -> Result<Vec<ApplicationSubmission>, LifecycleError> {
        let key = state.bucket_key();
        let Some(bytes) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        let mut entries: Vec<ApplicationSubmission> = serde_json::from_slice(&bytes)
            .map_err(|source| LifecycleError::CorruptBucket { key, source })?;
        if assign_missing_ids(&mut entries) > 0 {
            self.write(state, &entries)?;
        }
        Ok(entries)
    }

    fn read_lenient(&self, state: ApplicationState) -> Vec<ApplicationSubmission> {
        let key = state.bucket_key();
        let bytes = match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(bucket = key, error = %e, "failed to read bucket; treating as empty");
                return Vec::new();
            }
        };
        let mut entries: Vec<ApplicationSubmission> = match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(bucket = key, error = %e, "failed to decode bucket; treating as empty");
                return Vec::new();
            }
        };
        if assign_missing_ids(&mut entries) > 0 {
            if let Err(e) = self.write(state, &entries) {
                tracing::warn!(bucket = key, error = %e, "failed to persist backfilled ids");
            }
        }
        entries
    }

    fn write(&self, state: ApplicationState, entries: &[ApplicationSubmission]) -> Result<(), LifecycleError> {
        let key = state.bucket_key();
        let bytes = serde_json::to_vec(entries).map_err(|source| crate::store::StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &bytes)?;
        Ok(())
    }
}

/// Give every unassigned entry a fresh id. Returns how many were assigned.
fn assign_missing_ids(entries: &mut [ApplicationSubmission]) -> usize {
    let mut assigned = 0;
    for entry in entries.iter_mut().filter(|e| e.id.is_unassigned()) {
        entry.id = ApplicationId::new();
        assigned += 1;
    }
    if assigned > 0 {
        tracing::info!(count = assigned, "assigned ids to stored applications");
    }
    assigned
}
