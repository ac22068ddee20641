pub mod pages;
pub mod schools;
pub mod upload;

use axum::{Router, routing::get};

use crate::AppState;
use crate::ui::layout::{ADD_PATH, LIST_PATH};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(pages::list_page))
        .route("/schools", get(pages::results_fragment))
        .route(ADD_PATH, get(pages::add_form).post(pages::submit_school))
        .route("/api/schools", get(schools::list_schools))
        .route("/health", get(schools::health))
}
