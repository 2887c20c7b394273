//! # ctal-state — Application Lifecycle and Persistence
//!
//! Moves talent applications through their lifecycle and persists them
//! through an injected key-value store.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──▶ Approved   (terminal)
//!    │
//!    └─────▶ Rejected   (terminal)
//! ```
//!
//! Each state is one bucket: a store key holding a JSON array of
//! [`ApplicationSubmission`](ctal_core::ApplicationSubmission) objects.
//!
//! | State | Key | Display seq offset |
//! |---|---|---|
//! | Pending | `pendingTalentApplications` | 1000 |
//! | Approved | `talentApplications` | 1 |
//! | Rejected | `rejectedTalentApplications` | 2000 |
//!
//! ## Modules
//!
//! - `store.rs`: the [`KeyValueStore`] seam with in-memory and file-backed
//!   implementations.
//! - `lifecycle.rs`: [`ApplicationState`] and its transition table.
//! - `registry.rs`: [`ApplicationRegistry`], the submit / approve / reject /
//!   load operations.
//! - `notify.rs`: the [`Notifier`] capability and the message templates.
//! - `admin.rs`: the `adminAuthenticated` flag gate.
//! - `spotlight.rs`: the weekly spotlight with its seven-day cache.
//!
//! Everything is synchronous and single-writer. Two processes sharing one
//! store race with last-write-wins semantics; nothing here locks or versions
//! a bucket.

pub mod admin;
pub mod lifecycle;
pub mod notify;
pub mod registry;
pub mod spotlight;
pub mod store;

pub use admin::{AdminGate, ADMIN_FLAG_KEY};
pub use lifecycle::{ApplicationState, LifecycleError};
pub use notify::{LogNotifier, MemoryNotifier, Notification, NotificationConfig, NotifyError, Notifier};
pub use registry::{ApplicationRegistry, BucketStats, LoadedApplications};
pub use spotlight::{SpotlightCache, SPOTLIGHT_REFRESH_MILLIS, SPOTLIGHT_TALENT_KEY, SPOTLIGHT_TIMESTAMP_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
