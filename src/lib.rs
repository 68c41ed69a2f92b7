//! Vitrine - HTTP backend for a personal portfolio site
//!
//! Exposes read/write endpoints over two MongoDB-backed collections:
//! a personal profile (singleton-like, first-inserted wins) and a list
//! of portfolio projects.
//!
//! ## Services
//!
//! - **API**: profile and project endpoints under `/api`
//! - **Diagnostics**: store connectivity report at `/test`
//!
//! If the store connection cannot be established at startup, the process
//! keeps running in degraded mode: reads return empty results, writes
//! fail with a connectivity error.

pub mod config;
pub mod db;
pub mod routes;
pub mod server;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{ApiError, FieldError, Result};
