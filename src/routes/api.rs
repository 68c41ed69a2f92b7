//! Profile and project endpoints
//!
//! ## Routes
//!
//! - `GET /api/profile` - First-inserted profile document, or `null`
//! - `POST /api/profile` - Create a profile document
//! - `GET /api/projects` - All project documents, in insertion order
//! - `POST /api/projects` - Create a project document
//!
//! Read paths degrade to empty results when the store is unavailable.
//! Write paths require the store and fail with 503 without it. Stored
//! documents must coerce into their output shape or the request fails;
//! there are no partial results.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

use crate::db::schemas::{
    ProfileInput, ProfileOut, ProjectInput, ProjectOut, PROFILE_COLLECTION, PROJECT_COLLECTION,
};
use crate::server::AppState;
use crate::types::{ApiError, Result};

/// Handle `GET /api/profile`
///
/// Only the first-inserted profile is surfaced; later documents are ignored.
pub async fn get_profile(state: Arc<AppState>) -> Result<Response<Full<Bytes>>> {
    let Some(store) = &state.store else {
        return Ok(json_response(b"null".to_vec()));
    };

    let docs = store.get_documents(PROFILE_COLLECTION, Some(1)).await?;
    let Some(doc) = docs.into_iter().next() else {
        return Ok(json_response(b"null".to_vec()));
    };

    let profile: ProfileOut = coerce_output("profile", doc)?;
    Ok(json_response(serde_json::to_vec(&profile)?))
}

/// Handle `GET /api/projects`
pub async fn get_projects(state: Arc<AppState>) -> Result<Response<Full<Bytes>>> {
    let Some(store) = &state.store else {
        return Ok(json_response(b"[]".to_vec()));
    };

    let docs = store.get_documents(PROJECT_COLLECTION, None).await?;
    let projects: Vec<ProjectOut> = docs
        .into_iter()
        .map(|doc| coerce_output("project", doc))
        .collect::<Result<_>>()?;

    Ok(json_response(serde_json::to_vec(&projects)?))
}

/// Handle `POST /api/profile`
pub async fn create_profile(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>> {
    let body = read_body(req).await?;
    let input: ProfileInput = parse_json(&body)?;
    input.validate().map_err(ApiError::Validation)?;

    let store = store_for_write(&state)?;
    let id = store.create_document(PROFILE_COLLECTION, &input).await?;
    info!(collection = PROFILE_COLLECTION, id = %id, "Document created");

    Ok(text_response(id))
}

/// Handle `POST /api/projects`
pub async fn create_project(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>> {
    let body = read_body(req).await?;
    let input: ProjectInput = parse_json(&body)?;
    input.validate().map_err(ApiError::Validation)?;

    let store = store_for_write(&state)?;
    let id = store.create_document(PROJECT_COLLECTION, &input).await?;
    info!(collection = PROJECT_COLLECTION, id = %id, "Document created");

    Ok(text_response(id))
}

/// Writes require an available store
fn store_for_write(state: &AppState) -> Result<&crate::db::MongoStore> {
    state
        .store
        .as_ref()
        .ok_or_else(|| ApiError::Database("store unavailable".into()))
}

/// Collect the request body into a byte buffer
async fn read_body(req: Request<Incoming>) -> Result<Bytes> {
    Ok(req.collect().await?.to_bytes())
}

/// Deserialize an inbound JSON payload
///
/// Serde's message carries the offending field name ("missing field `name`").
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::validation("body", e.to_string()))
}

/// Strip the storage-internal `_id` and coerce into the output shape
fn coerce_output<T: DeserializeOwned>(kind: &'static str, mut doc: bson::Document) -> Result<T> {
    doc.remove("_id");
    bson::from_document(doc)
        .map_err(|e| ApiError::validation(kind, format!("stored document failed validation: {}", e)))
}

/// Build successful JSON response
fn json_response(data: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(data)))
        .unwrap()
}

/// Build plain-text response carrying a new document id
fn text_response(id: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(id)))
        .unwrap()
}
