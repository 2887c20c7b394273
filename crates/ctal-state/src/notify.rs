//! # Notifications
//!
//! Applicants and the agency admin are told about every review decision.
//! Delivery is a capability injected into the registry: [`LogNotifier`]
//! writes the message to the log instead of sending it, and a mail
//! integration only has to implement [`Notifier`].

use parking_lot::Mutex;
use thiserror::Error;

use ctal_core::TalentRecord;

/// An outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery failure reported by a [`Notifier`].
#[derive(Error, Debug)]
#[error("failed to notify {to}: {reason}")]
pub struct NotifyError {
    pub to: String,
    pub reason: String,
}

/// Capability to deliver a notification.
///
/// Implementations must be `Send + Sync`. A failed delivery never undoes the
/// lifecycle transition that triggered it; the registry logs it and moves on.
pub trait Notifier: Send + Sync {
    /// Deliver one message.
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// Human-readable name of this implementation.
    fn notifier_name(&self) -> &str;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        (**self).send(notification)
    }

    fn notifier_name(&self) -> &str {
        (**self).notifier_name()
    }
}

/// Logs each message at `info` and reports success.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, n: &Notification) -> Result<(), NotifyError> {
        tracing::info!(to = %n.to, subject = %n.subject, "{}", n.body);
        Ok(())
    }

    fn notifier_name(&self) -> &str {
        "LogNotifier"
    }
}

/// Keeps every message in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().push(notification.clone());
        Ok(())
    }

    fn notifier_name(&self) -> &str {
        "MemoryNotifier"
    }
}

// ─── Message templates ───────────────────────────────────────────────

/// Addressing and branding for review notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Fixed admin mailbox copied on every decision.
    pub admin_email: String,
    /// Agency name used in applicant-facing text.
    pub brand: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            admin_email: "Cremetalentafrica@gmail.com".to_string(),
            brand: "CrémeTalent".to_string(),
        }
    }
}

impl NotificationConfig {
    /// Applicant and admin messages for an approval.
    pub fn approval_messages(&self, talent: &TalentRecord) -> [Notification; 2] {
        [
            Notification {
                to: talent.email.clone(),
                subject: "Application Approved".to_string(),
                body: format!(
                    "Congratulations! Your application to join the {} talent pool has been approved.\n\
                     Your profile is now visible in our talent pool.",
                    self.brand
                ),
            },
            Notification {
                to: self.admin_email.clone(),
                subject: "Talent Application Approved".to_string(),
                body: format!(
                    "A talent application has been approved:\nName: {}\nEmail: {}\nCategory: {}",
                    talent.name, talent.email, talent.category
                ),
            },
        ]
    }

    /// Applicant and admin messages for a rejection.
    pub fn rejection_messages(&self, talent: &TalentRecord, reason: Option<&str>) -> [Notification; 2] {
        let mut applicant_body = format!(
            "Thank you for your interest in joining the {} talent pool.\n\
             After careful review, we regret to inform you that we are unable to accept your application at this time.",
            self.brand
        );
        if let Some(reason) = reason {
            applicant_body.push_str(&format!("\nReason: {reason}"));
        }
        [
            Notification {
                to: talent.email.clone(),
                subject: "Application Status Update".to_string(),
                body: applicant_body,
            },
            Notification {
                to: self.admin_email.clone(),
                subject: "Talent Application Rejected".to_string(),
                body: format!(
                    "A talent application has been rejected:\nName: {}\nEmail: {}\nReason: {}",
                    talent.name,
                    talent.email,
                    reason.unwrap_or("No reason provided")
                ),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctal_core::{ApplicationId, TalentStatus};

    fn talent() -> TalentRecord {
        TalentRecord {
            id: ApplicationId::new(),
            seq: 1000,
            name: "Ada Lovelace".into(),
            photo: None,
            location: "London, UK".into(),
            category: "UX/UI Design".into(),
            experience: "Advanced".into(),
            availability: "Immediate".into(),
            bio: String::new(),
            skills: Vec::new(),
            portfolio: Vec::new(),
            email: "ada@x.com".into(),
            status: TalentStatus::Pending,
            notes: String::new(),
            match_score: 0,
            last_contact: String::new(),
        }
    }

    #[test]
    fn approval_goes_to_applicant_then_admin() {
        let cfg = NotificationConfig::default();
        let [applicant, admin] = cfg.approval_messages(&talent());
        assert_eq!(applicant.to, "ada@x.com");
        assert_eq!(applicant.subject, "Application Approved");
        assert!(applicant.body.contains("CrémeTalent talent pool"));
        assert_eq!(admin.to, "Cremetalentafrica@gmail.com");
        assert!(admin.body.contains("Category: UX/UI Design"));
    }

    #[test]
    fn rejection_includes_reason_only_when_given() {
        let cfg = NotificationConfig {
            admin_email: "ops@laundro.example".into(),
            brand: "FreshFold".into(),
        };
        let [applicant, admin] = cfg.rejection_messages(&talent(), Some("Portfolio unavailable"));
        assert!(applicant.body.contains("FreshFold talent pool"));
        assert!(applicant.body.ends_with("Reason: Portfolio unavailable"));
        assert!(admin.body.ends_with("Reason: Portfolio unavailable"));
        assert_eq!(admin.to, "ops@laundro.example");

        let [applicant, admin] = cfg.rejection_messages(&talent(), None);
        assert!(!applicant.body.contains("Reason:"));
        assert!(admin.body.ends_with("Reason: No reason provided"));
    }

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        for n in NotificationConfig::default().approval_messages(&talent()) {
            notifier.send(&n).unwrap();
        }
        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "Application Approved");
        assert_eq!(notifier.notifier_name(), "MemoryNotifier");
    }

    #[test]
    fn log_notifier_always_succeeds() {
        let [n, _] = NotificationConfig::default().approval_messages(&talent());
        assert!(LogNotifier.send(&n).is_ok());
    }
}
