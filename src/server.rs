use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::api;
use crate::backend;
use crate::config::AppConfig;
use crate::security::rate_limit::rate_limit_middleware;

/// Request body cap. Above the 5MB image limit so oversized images reach
/// validation and get a field message instead of a transport error.
const BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Assemble the router with all middleware.
pub fn build_app(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    // Timeouts stay in the stack even when disabled so the layer types are
    // the same either way; "disabled" is just a very long timeout.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(config.resilience.request_timeout_secs)
    };

    api::router()
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .fallback(api::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let store = backend::build_store(&config.backend)?;

    info!(
        name: "backend.config.loaded",
        provider = %config.backend.provider,
        table = %config.backend.table,
        bucket = %config.backend.bucket,
        "Backend configured"
    );

    let state = AppState::new(Arc::clone(&config), store);
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
