//! Backend-as-a-service facade.
//!
//! The application owns no storage. Rows live in a managed table and images in
//! a public object-storage bucket; [`SchoolStore`] is the seam between the web
//! layer and whichever provider is configured.

pub mod memory;
pub mod supabase;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::school::model::{NewSchool, School};

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

/// Errors raised by backend calls.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// Invalid backend URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Malformed response payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider misconfiguration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Table and object-storage operations used by the application.
#[async_trait]
pub trait SchoolStore: Send + Sync + std::fmt::Debug {
    /// Store an image object at `path` in the images bucket.
    async fn upload_image(&self, path: &str, content_type: &str, bytes: &[u8]) -> Result<()>;

    /// Public URL of an object previously uploaded at `path`.
    fn public_url(&self, path: &str) -> String;

    /// Insert one school row.
    async fn insert_school(&self, school: &NewSchool) -> Result<()>;

    /// All school rows, newest first.
    async fn list_schools(&self) -> Result<Vec<School>>;
}

/// Build the store selected by `backend.provider`.
pub fn build_store(config: &BackendConfig) -> Result<Arc<dyn SchoolStore>> {
    match config.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "supabase" => Ok(Arc::new(SupabaseStore::new(config)?)),
        other => Err(BackendError::Config(format!(
            "unknown backend provider '{other}' (expected 'supabase' or 'memory')"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> BackendConfig {
        BackendConfig {
            provider: provider.into(),
            url: "https://abc.supabase.co".into(),
            api_key: "anon-key".into(),
            bucket: "school-images".into(),
            table: "schools".into(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_build_store_providers() {
        assert!(build_store(&config("memory")).is_ok());
        assert!(build_store(&config("supabase")).is_ok());
        assert!(matches!(
            build_store(&config("sqlite")),
            Err(BackendError::Config(_))
        ));
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let err = BackendError::Api {
            status: 409,
            message: "duplicate key".into(),
        };
        assert_eq!(err.to_string(), "duplicate key");
    }
}
