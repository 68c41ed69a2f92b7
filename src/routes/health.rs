//! Root liveness endpoint
//!
//! Returns a static banner so load balancers and humans can see the
//! backend is up without touching the store.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

/// Handle `GET /`
pub fn root_check() -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "message": "Portfolio backend running" });

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_always_ok() {
        assert_eq!(root_check().status(), StatusCode::OK);
    }
}
