//! HTML page handlers.

use axum::{
    extract::{Multipart, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::AppState;
use crate::api::upload::read_submission;
use crate::school::search::{ALL_CITIES, filter, unique_cities};
use crate::school::validation::{FieldErrors, SchoolForm};
use crate::school::{School, SubmitError, submit};
use crate::ui::components::Toast;
use crate::ui::layout::LIST_PATH;
use crate::ui::pages::{self, add_school, schools};

/// Fallback shown when a backend call fails without a message.
const GENERIC_FAILURE: &str = "Failed to add school. Please try again.";

/// Query string of the list page and the live-search fragment.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub city: String,
    /// Set by the redirect after a successful submission.
    #[serde(default)]
    pub added: Option<String>,
}

impl ListQuery {
    fn is_filtered(&self) -> bool {
        !self.q.trim().is_empty() || (!self.city.is_empty() && self.city != ALL_CITIES)
    }
}

/// Fetch all schools; a failure becomes an empty list plus an error toast.
async fn fetch_schools(state: &AppState) -> (Vec<School>, Option<Toast>) {
    match state.store.list_schools().await {
        Ok(schools) => (schools, None),
        Err(e) => {
            tracing::error!(name: "school.list.failed", error = %e, "Error fetching schools");
            (
                Vec::new(),
                Some(Toast::error("Error", format!("Could not load schools: {e}"))),
            )
        }
    }
}

/// GET / - List and search schools.
pub async fn list_page(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Html<String> {
    let (all, error) = fetch_schools(&state).await;

    let toast = error.or_else(|| {
        query
            .added
            .as_ref()
            .map(|_| Toast::success("Success!", "School has been added successfully."))
    });

    let cities = unique_cities(&all);
    let visible = filter(&all, &query.q, Some(&query.city));

    Html(schools::render(&schools::ListView {
        total: all.len(),
        visible: &visible,
        cities: &cities,
        query: &query.q,
        city: &query.city,
        toast: toast.as_ref(),
    }))
}

/// GET /schools - Result grid only, for live search swaps.
pub async fn results_fragment(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let (all, error) = fetch_schools(&state).await;
    let visible = filter(&all, &query.q, Some(&query.city));
    let grid = schools::results(&visible, query.is_filtered());

    match error {
        Some(toast) => (StatusCode::BAD_GATEWAY, Html(format!("{}{grid}", toast.render()))).into_response(),
        None => Html(grid).into_response(),
    }
}

/// GET /add-school - Blank form.
pub async fn add_form() -> Html<String> {
    Html(add_school::render(&SchoolForm::default(), &FieldErrors::default(), None))
}

/// POST /add-school - Validate, upload the image, insert the row.
pub async fn submit_school(State(state): State<AppState>, multipart: Multipart) -> Response {
    let (form, image) = read_submission(multipart).await;

    let image = match image {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(name: "school.submit.multipart", error = %e, "Unreadable submission");
            let status = e.status();
            let toast = if status == StatusCode::PAYLOAD_TOO_LARGE {
                Toast::error("Error", "Max file size is 5MB")
            } else {
                Toast::error("Error", format!("Could not read the form: {}", e.body_text()))
            };
            let html = add_school::render(&form, &FieldErrors::default(), Some(&toast));
            return (status, Html(html)).into_response();
        }
    };

    match submit(state.store.as_ref(), &form, image).await {
        Ok(_) => Redirect::to(&format!("{LIST_PATH}?added=1")).into_response(),
        Err(SubmitError::Invalid(errors)) => {
            tracing::debug!(name: "school.submit.invalid", fields = errors.len(), "Validation failed");
            let html = add_school::render(&form, &errors, None);
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
        Err(SubmitError::Backend(e)) => {
            tracing::error!(name: "school.submit.failed", error = %e, "Failed to add school");
            let message = e.to_string();
            let message = if message.trim().is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                message
            };
            let toast = Toast::error("Error", message);
            let html = add_school::render(&form, &FieldErrors::default(), Some(&toast));
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

/// Fallback - 404 page.
pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found(uri.path())))
}
