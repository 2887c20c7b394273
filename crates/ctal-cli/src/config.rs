//! CLI configuration.
//!
//! Loaded from environment variables with defaults; global flags override
//! individual fields after loading.

use std::path::PathBuf;

use ctal_state::NotificationConfig;

/// Runtime configuration of the `ctal` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Root directory of the file-backed store.
    pub data_dir: PathBuf,
    /// Admin mailbox copied on every review decision.
    pub admin_email: String,
    /// Agency name used in applicant-facing messages.
    pub brand: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        let notifications = NotificationConfig::default();
        Self {
            data_dir: PathBuf::from(".ctal"),
            admin_email: notifications.admin_email,
            brand: notifications.brand,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CTAL_DATA_DIR` (default: `.ctal`)
    /// - `CTAL_ADMIN_EMAIL` (default: `Cremetalentafrica@gmail.com`)
    /// - `CTAL_BRAND` (default: `CrémeTalent`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = match lookup("CTAL_DATA_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDataDir),
            Some(raw) => PathBuf::from(raw),
            None => defaults.data_dir,
        };

        let admin_email = lookup("CTAL_ADMIN_EMAIL").unwrap_or(defaults.admin_email);
        if !admin_email.contains('@') {
            return Err(ConfigError::InvalidAdminEmail(admin_email));
        }

        let brand = match lookup("CTAL_BRAND") {
            Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
            _ => defaults.brand,
        };

        Ok(Self {
            data_dir,
            admin_email,
            brand,
        })
    }

    /// The notification addressing derived from this config.
    pub fn notifications(&self) -> NotificationConfig {
        NotificationConfig {
            admin_email: self.admin_email.clone(),
            brand: self.brand.clone(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CTAL_DATA_DIR is set but empty")]
    EmptyDataDir,
    #[error("CTAL_ADMIN_EMAIL is not an email address: {0:?}")]
    InvalidAdminEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.data_dir, PathBuf::from(".ctal"));
        assert_eq!(cfg.admin_email, "Cremetalentafrica@gmail.com");
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = CliConfig::from_lookup(lookup(&[
            ("CTAL_DATA_DIR", "/var/lib/ctal"),
            ("CTAL_ADMIN_EMAIL", "desk@freshfold.example"),
            ("CTAL_BRAND", " FreshFold "),
        ]))
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/ctal"));
        assert_eq!(cfg.notifications().admin_email, "desk@freshfold.example");
        assert_eq!(cfg.notifications().brand, "FreshFold");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("CTAL_DATA_DIR", "  ")])),
            Err(ConfigError::EmptyDataDir)
        ));
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("CTAL_ADMIN_EMAIL", "nobody")])),
            Err(ConfigError::InvalidAdminEmail(_))
        ));
    }

    #[test]
    fn blank_brand_falls_back() {
        let cfg = CliConfig::from_lookup(lookup(&[("CTAL_BRAND", "")])).unwrap();
        assert_eq!(cfg.brand, "CrémeTalent");
    }
}
