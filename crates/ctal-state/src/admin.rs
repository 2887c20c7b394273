//! # Admin Gate
//!
//! Admin views are gated on a single store flag, `adminAuthenticated`, set
//! to the string `"true"`. There is no credential behind it: whoever can
//! write the store can log in.

use crate::store::{KeyValueStore, StoreError};

/// Store key of the admin flag.
pub const ADMIN_FLAG_KEY: &str = "adminAuthenticated";

/// Reads and toggles the admin flag.
#[derive(Debug)]
pub struct AdminGate<S> {
    store: S,
}

impl<S: KeyValueStore> AdminGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the flag is present and equal to `"true"`. Read errors count
    /// as logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.store.get(ADMIN_FLAG_KEY) {
            Ok(Some(value)) => value == b"true",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read admin flag");
                false
            }
        }
    }

    pub fn login(&self) -> Result<(), StoreError> {
        self.store.set(ADMIN_FLAG_KEY, b"true")?;
        tracing::info!("admin session opened");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(ADMIN_FLAG_KEY)?;
        tracing::info!("admin session closed");
        Ok(())
    }
}
