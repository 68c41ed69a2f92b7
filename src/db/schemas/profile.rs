//! Profile document schema
//!
//! The portfolio owner's personal profile. Singleton-like: documents can
//! accumulate, but only the first-inserted one is ever surfaced on read.

use serde::{Deserialize, Serialize};

use crate::db::schemas::validate_url;
use crate::types::FieldError;

/// Collection name for profile documents
pub const PROFILE_COLLECTION: &str = "profile";

/// Inbound profile payload (POST /api/profile)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProfileInput {
    /// Full name
    pub name: String,
    /// Headline or current role
    pub title: String,
    /// Short bio
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Personal website (http/https)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// GitHub profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// LinkedIn profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Key skills, in display order
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ProfileInput {
    /// Check URL-shaped fields; one error per offending field
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate_url("website", self.website.as_deref(), &mut errors);
        validate_url("github", self.github.as_deref(), &mut errors);
        validate_url("linkedin", self.linkedin.as_deref(), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Outbound profile shape (GET /api/profile), `_id` already stripped
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProfileOut {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ProfileInput {
        ProfileInput {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            summary: "First programmer".to_string(),
            location: None,
            email: None,
            website: None,
            github: None,
            linkedin: None,
            skills: Vec::new(),
        }
    }

    #[test]
    fn minimal_profile_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn bad_links_report_each_field() {
        let input = ProfileInput {
            website: Some("https://ada.example".to_string()),
            github: Some("github.com/ada".to_string()),
            linkedin: Some("also wrong".to_string()),
            ..minimal()
        };

        let errors = input.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["github", "linkedin"]);
    }

    #[test]
    fn missing_name_fails_deserialization() {
        let err = serde_json::from_str::<ProfileInput>(
            r#"{"title": "Analyst", "summary": "First programmer"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn none_fields_are_omitted_from_storage() {
        let doc = bson::to_document(&minimal()).unwrap();
        assert!(!doc.contains_key("location"));
        assert!(doc.contains_key("skills"));
    }
}
