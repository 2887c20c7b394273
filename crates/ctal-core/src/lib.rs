//! # ctal-core — Foundational Types for the Talent Pool
//!
//! This crate defines the data model shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One canonical application record.** [`ApplicationSubmission`] is the
//!    only representation of an application. Its serde form *is* the storage
//!    view; [`TalentRecord::from_submission`] is the only way to build the
//!    display view from it. No call site re-implements the field mapping.
//!
//! 2. **Durable identifiers.** [`ApplicationId`] is assigned once at
//!    submission and carried through every bucket transition. The integer
//!    `seq` on a [`TalentRecord`] is a session-local display handle only.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] is UTC with seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ctal-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod application;
pub mod error;
pub mod identity;
pub mod query;
pub mod talent;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use application::ApplicationSubmission;
pub use error::CtalError;
pub use identity::ApplicationId;
pub use query::{ClientRequirements, TalentFilters};
pub use talent::{TalentRecord, TalentStatus};
pub use temporal::Timestamp;
