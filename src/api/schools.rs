//! JSON endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::api::pages::ListQuery;
use crate::school::School;
use crate::school::search::filter;

/// GET /api/schools - Schools as JSON, newest first, with `q`/`city` filters.
pub async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<School>>, (StatusCode, String)> {
    let all = state
        .store
        .list_schools()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let visible = filter(&all, &query.q, Some(&query.city))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(visible))
}

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
