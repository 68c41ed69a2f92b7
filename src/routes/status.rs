//! Diagnostic endpoint
//!
//! `GET /test` reports store connectivity, whether the two database
//! settings are present in the environment (never their values), and a
//! best-effort list of existing collections. This endpoint never fails:
//! store errors are rendered as a truncated string instead.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::server::AppState;

/// Cap for error strings surfaced in the diagnostic body
const ERROR_PREVIEW_CHARS: usize = 80;

/// Diagnostic response payload
#[derive(Debug, Serialize)]
pub struct TestResponse {
    /// Always "Running" - the handler executing proves it
    pub backend: &'static str,
    /// "Connected", "Not Available", or a truncated error string
    pub database: String,
    /// Whether DATABASE_URL is set (presence only)
    pub database_url: &'static str,
    /// Whether DATABASE_NAME is set (presence only)
    pub database_name: &'static str,
    /// Existing collection names, when the store answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
}

/// Handle `GET /test`
pub async fn test_check(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let args = &state.args;

    let mut database = match &state.store {
        Some(_) => "Connected".to_string(),
        None => "Not Available".to_string(),
    };

    let mut collections = None;
    if let Some(store) = &state.store {
        match store.list_collection_names().await {
            Ok(names) => collections = Some(names),
            Err(e) => {
                let msg = format!("Error: {}", e);
                database = truncate(&msg, ERROR_PREVIEW_CHARS).to_string();
            }
        }
    }

    let response = TestResponse {
        backend: "Running",
        database,
        database_url: set_or_not(args.database_url.is_some()),
        database_name: set_or_not(args.database_name.is_some()),
        collections,
    };

    let body = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"backend":"Running","database":"Error: serialization failed"}"#.to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn set_or_not(present: bool) -> &'static str {
    if present {
        "Set"
    } else {
        "Not Set"
    }
}

/// Truncate to at most `max` bytes, respecting char boundaries
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;

    fn degraded_state() -> Arc<AppState> {
        let args = Args {
            port: 8000,
            database_url: None,
            database_name: None,
            log_level: "info".to_string(),
        };
        Arc::new(AppState::new(args, None))
    }

    #[tokio::test]
    async fn diagnostic_reports_unavailable_store() {
        let resp = test_check(degraded_state()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = http_body_util::BodyExt::collect(resp.into_body())
            .await
            .unwrap()
            .to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["backend"], "Running");
        assert_eq!(json["database"], "Not Available");
        assert_eq!(json["database_url"], "Not Set");
        assert_eq!(json["database_name"], "Not Set");
        assert!(json.get("collections").is_none());
    }

    #[test]
    fn truncate_caps_long_errors() {
        let long = "x".repeat(300);
        assert_eq!(truncate(&long, ERROR_PREVIEW_CHARS).len(), 80);

        let short = "connection refused";
        assert_eq!(truncate(short, ERROR_PREVIEW_CHARS), short);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // 'é' is two bytes; cutting mid-char must back off
        let s = "é".repeat(50);
        let cut = truncate(&s, 81);
        assert!(cut.len() <= 81);
        assert!(s.starts_with(cut));
    }
}
