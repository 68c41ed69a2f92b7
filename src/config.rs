//! Configuration for the portfolio backend
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Default connection string when DATABASE_URL is unset
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";

/// Default database name when DATABASE_NAME is unset
pub const DEFAULT_DATABASE_NAME: &str = "portfolio";

/// Vitrine - portfolio API backend
#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine")]
#[command(about = "HTTP backend for a personal portfolio site")]
pub struct Args {
    /// Port to listen on (binds 0.0.0.0)
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// MongoDB connection string
    ///
    /// The /test endpoint reports whether this is set, never its value.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Socket address to bind the HTTP listener to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Effective connection string (falls back to localhost if not set)
    pub fn effective_database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Effective database name (falls back to "portfolio" if not set)
    pub fn effective_database_name(&self) -> &str {
        self.database_name
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> Args {
        Args {
            port: 8000,
            database_url: None,
            database_name: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let args = bare_args();
        assert_eq!(args.effective_database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(args.effective_database_name(), DEFAULT_DATABASE_NAME);
        assert_eq!(args.listen_addr().port(), 8000);
    }

    #[test]
    fn explicit_values_win() {
        let args = Args {
            database_url: Some("mongodb://db.example:27017".to_string()),
            database_name: Some("folio".to_string()),
            ..bare_args()
        };
        assert_eq!(args.effective_database_url(), "mongodb://db.example:27017");
        assert_eq!(args.effective_database_name(), "folio");
    }
}
