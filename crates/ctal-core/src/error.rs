//! # Error Types
//!
//! Errors raised while constructing or decoding the core data model. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Lifecycle and storage errors live in `ctal-state`.

use thiserror::Error;

/// Top-level error type for the core data model.
#[derive(Error, Debug)]
pub enum CtalError {
    /// An identifier string could not be parsed.
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string or epoch value could not be interpreted.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
