//! HTTP server implementation
//!
//! hyper http1 with TokioIo for async handling; one spawned task per
//! connection, match-based routing.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Args;
use crate::db::MongoStore;
use crate::routes;
use crate::types::{ApiError, Result};

/// Shared application state
///
/// The store handle is established once at startup and never reassigned;
/// `None` means the process runs in degraded mode (reads come back empty,
/// writes fail with 503).
pub struct AppState {
    pub args: Args,
    pub store: Option<MongoStore>,
}

impl AppState {
    pub fn new(args: Args, store: Option<MongoStore>) -> Self {
        Self { args, store }
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.args.listen_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Vitrine listening on {}", addr);
    if state.store.is_none() {
        warn!("Store unavailable - serving reads as empty results");
    }

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, peer, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", peer, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    peer: SocketAddr,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", peer, method, path);

    let response = match (method, path.as_str()) {
        (Method::GET, "/") => routes::root_check(),

        (Method::GET, "/api/profile") => routes::get_profile(Arc::clone(&state))
            .await
            .unwrap_or_else(error_response),

        (Method::POST, "/api/profile") => routes::create_profile(req, Arc::clone(&state))
            .await
            .unwrap_or_else(error_response),

        (Method::GET, "/api/projects") => routes::get_projects(Arc::clone(&state))
            .await
            .unwrap_or_else(error_response),

        (Method::POST, "/api/projects") => routes::create_project(req, Arc::clone(&state))
            .await
            .unwrap_or_else(error_response),

        (Method::GET, "/test") => routes::test_check(Arc::clone(&state)).await,

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        _ => not_found_response(&path),
    };

    Ok(response)
}

/// Render an ApiError as a JSON response
fn error_response(err: ApiError) -> Response<Full<Bytes>> {
    let status = err.status_code();

    if status.is_server_error() {
        error!("Request failed: {}", err);
    }

    let body = match &err {
        ApiError::Validation(fields) => serde_json::json!({
            "error": "Validation failed",
            "fields": fields,
        }),
        _ => serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": err.to_string(),
        }),
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

/// CORS preflight response: any origin, any method, any header
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "*")
        .header("Access-Control-Allow-Credentials", "true")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldError;

    #[test]
    fn validation_errors_carry_field_detail() {
        let err = ApiError::Validation(vec![FieldError {
            field: "repo_url",
            message: "invalid URL".to_string(),
        }]);

        let resp = error_response(err);
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn preflight_allows_any_origin() {
        let resp = preflight_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Credentials")
                .unwrap(),
            "true"
        );
    }

    #[test]
    fn unknown_paths_are_404() {
        assert_eq!(not_found_response("/nope").status(), StatusCode::NOT_FOUND);
    }
}
