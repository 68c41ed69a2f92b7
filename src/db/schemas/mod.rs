//! Document schemas for the portfolio collections
//!
//! Each entity declares its backing collection name as a const alongside its
//! input and output shapes. The input shape is what POST bodies deserialize
//! into; the output shape is what stored documents must coerce back into.

mod profile;
mod project;

pub use profile::{ProfileInput, ProfileOut, PROFILE_COLLECTION};
pub use project::{ProjectInput, ProjectOut, PROJECT_COLLECTION};

use url::Url;

use crate::types::FieldError;

/// Validate an optional URL-shaped field, pushing a field error on failure
///
/// Absent values pass; present values must parse as http or https URLs.
pub(crate) fn validate_url(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) {
    let Some(raw) = value else {
        return;
    };

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(FieldError {
            field,
            message: format!("unsupported URL scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(FieldError {
            field,
            message: format!("invalid URL: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names_are_distinct_and_stable() {
        // Both read and write paths use these consts; a collision would
        // silently merge the two entity stores.
        assert_ne!(PROFILE_COLLECTION, PROJECT_COLLECTION);
        assert_eq!(PROFILE_COLLECTION, "profile");
        assert_eq!(PROJECT_COLLECTION, "project");
    }

    #[test]
    fn absent_url_passes() {
        let mut errors = Vec::new();
        validate_url("website", None, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_url_names_the_field() {
        let mut errors = Vec::new();
        validate_url("repo_url", Some("not-a-url"), &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "repo_url");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut errors = Vec::new();
        validate_url("website", Some("ftp://example.com"), &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("scheme"));
    }
}
