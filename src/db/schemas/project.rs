//! Project document schema

use serde::{Deserialize, Serialize};

use crate::db::schemas::validate_url;
use crate::types::FieldError;

/// Collection name for project documents
pub const PROJECT_COLLECTION: &str = "project";

/// Inbound project payload (POST /api/projects)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProjectInput {
    /// Project name
    pub title: String,
    /// What the project does
    pub description: String,
    /// Why it was built / impact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Programming languages used, in display order
    #[serde(default)]
    pub languages: Vec<String>,
    /// Frameworks and libraries used
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// When it was built (e.g. "2024 Q1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    /// Git repository URL (http/https)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Live demo URL (http/https)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Achievement bullet points
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ProjectInput {
    /// Check URL-shaped fields; one error per offending field
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate_url("repo_url", self.repo_url.as_deref(), &mut errors);
        validate_url("live_url", self.live_url.as_deref(), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Outbound project shape (GET /api/projects), `_id` already stripped
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProjectOut {
    pub title: String,
    pub description: String,
    pub purpose: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    pub timeframe: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}
