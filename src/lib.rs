//! School Directory
//!
//! A small directory web application: a form to register a school (with an
//! image) and a page that lists and searches registered schools. Rows and
//! images live in a managed backend (Supabase); this crate is validation,
//! rendering and the calls in between.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server rendering HTML, progressively enhanced with HTMX
//! - **Backend**: [`backend::SchoolStore`] over Supabase (or in memory)
//! - **Domain**: validation, search and the submission flow in [`school`]
//!
//! # Modules
//!
//! - [`api`]: route handlers
//! - [`backend`]: table and object-storage providers
//! - [`config`]: layered configuration
//! - [`school`]: the `School` entity, validation, search, submission
//! - [`security`]: request rate limiting
//! - [`server`]: router assembly and startup
//! - [`telemetry`]: logging setup
//! - [`ui`]: server-rendered pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod api;
pub mod backend;
pub mod config;
pub mod school;
pub mod security;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::backend::SchoolStore;
use crate::config::AppConfig;
use crate::security::rate_limit::AppRateLimiter;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Table and image storage.
    pub store: Arc<dyn SchoolStore>,
    /// Global Rate Limiter
    pub rate_limiter: Arc<AppRateLimiter>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn SchoolStore>) -> Self {
        let rate_limiter = Arc::new(AppRateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            store,
            rate_limiter,
            config,
        }
    }
}
