//! # Application Submissions
//!
//! The canonical record of one talent application. The serde representation
//! of [`ApplicationSubmission`] is the storage view: it is exactly the JSON
//! object the intake form writes into a bucket, so stored buckets can be
//! decoded and re-encoded without a separate mapping layer.
//!
//! ## Storage shape
//!
//! ```json
//! {
//!   "id": "4b7c…",
//!   "firstName": "Ada", "lastName": "Lovelace",
//!   "email": "ada@x.com", "phone": "",
//!   "city": "London", "country": "UK",
//!   "specialization": "UX/UI Design",
//!   "experienceLevel": "Advanced",
//!   "availability": "Immediate",
//!   "bio": "...",
//!   "skills": "Figma, Prototyping",
//!   "portfolioUrl": "ada.dev",
//!   "rejectionReason": "..."
//! }
//! ```
//!
//! `skills` is a comma-joined string on disk and a list in memory. Missing
//! fields decode to empty values; `id` decodes to
//! [`ApplicationId::unassigned`] when absent.

use serde::{Deserialize, Serialize};

use crate::identity::ApplicationId;
use crate::temporal::Timestamp;

/// One talent application, as captured by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationSubmission {
    /// Durable identifier, minted at submission.
    pub id: ApplicationId,
    pub first_name: String,
    pub last_name: String,
    /// Contact address. Not declared unique and never deduplicated.
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    /// Free-text specialization label; becomes the record's category.
    pub specialization: String,
    /// Level label such as "Beginner", "Intermediate" or "Advanced".
    pub experience_level: String,
    pub availability: String,
    pub bio: String,
    /// Skill tags in the order the applicant listed them.
    #[serde(with = "comma_list")]
    pub skills: Vec<String>,
    pub portfolio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heard_from: Option<String>,
    pub accept_terms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<Timestamp>,
    /// Present only on entries in the rejected bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Default for ApplicationSubmission {
    fn default() -> Self {
        Self {
            id: ApplicationId::unassigned(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            country: String::new(),
            specialization: String::new(),
            experience_level: String::new(),
            availability: String::new(),
            bio: String::new(),
            skills: Vec::new(),
            portfolio_url: String::new(),
            linkedin: None,
            instagram: None,
            twitter: None,
            heard_from: None,
            accept_terms: false,
            submitted_at: None,
            rejection_reason: None,
        }
    }
}

impl ApplicationSubmission {
    /// `"First Last"`, or whichever half is present.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// `"City, Country"`, or just the city when no country was given.
    pub fn location(&self) -> String {
        let city = self.city.trim();
        let country = self.country.trim();
        if country.is_empty() {
            city.to_string()
        } else {
            format!("{city}, {country}")
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serde adapter: `Vec<String>` <-> `"a, b, c"`.
///
/// Arrays are also accepted on input, since some producers stored the
/// already-split list.
mod comma_list {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    pub fn serialize<S: Serializer>(tags: &[String], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&tags.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Raw::deserialize(d)? {
            Raw::Joined(s) => super::split_tags(&s),
            Raw::List(v) => v
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ApplicationSubmission {
        ApplicationSubmission {
            id: ApplicationId::new(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            city: "London".into(),
            country: "UK".into(),
            specialization: "UX/UI Design".into(),
            experience_level: "Advanced".into(),
            availability: "Immediate".into(),
            bio: "...".into(),
            skills: vec!["Figma".into(), "Prototyping".into()],
            portfolio_url: "ada.dev".into(),
            ..Default::default()
        }
    }

    #[test]
    fn storage_view_uses_camel_case_and_joined_skills() {
        let value = serde_json::to_value(ada()).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["experienceLevel"], "Advanced");
        assert_eq!(value["portfolioUrl"], "ada.dev");
        assert_eq!(value["skills"], "Figma, Prototyping");
        assert!(value.get("rejectionReason").is_none());
        assert!(value.get("linkedin").is_none());
    }

    #[test]
    fn decodes_form_capture_without_id() {
        let json = r#"{
            "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x.com",
            "city": "London", "country": "UK", "specialization": "UX/UI Design",
            "experienceLevel": "Advanced", "availability": "Immediate",
            "bio": "...", "skills": " Figma ,Prototyping, ", "portfolioUrl": "ada.dev",
            "phone": "", "linkedin": "", "acceptTerms": true
        }"#;
        let sub: ApplicationSubmission = serde_json::from_str(json).unwrap();
        assert!(sub.id.is_unassigned());
        assert_eq!(sub.skills, vec!["Figma", "Prototyping"]);
        assert_eq!(sub.linkedin.as_deref(), Some(""));
        assert!(sub.accept_terms);
    }

    #[test]
    fn decodes_skills_given_as_array() {
        let json = r#"{ "skills": ["Video Editing", " Animation "] }"#;
        let sub: ApplicationSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(sub.skills, vec!["Video Editing", "Animation"]);
    }

    #[test]
    fn rejection_reason_survives_storage() {
        let mut sub = ada();
        sub.rejection_reason = Some("Portfolio link broken".into());
        let json = serde_json::to_string(&sub).unwrap();
        let back: ApplicationSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
    }

    #[test]
    fn full_name_and_location() {
        let sub = ada();
        assert_eq!(sub.full_name(), "Ada Lovelace");
        assert_eq!(sub.location(), "London, UK");

        let lone = ApplicationSubmission {
            first_name: "Cher".into(),
            city: "Lagos".into(),
            ..Default::default()
        };
        assert_eq!(lone.full_name(), "Cher");
        assert_eq!(lone.location(), "Lagos");
    }

    #[test]
    fn split_tags_drops_empty_entries() {
        assert_eq!(split_tags("a, ,b,"), vec!["a", "b"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }
}
