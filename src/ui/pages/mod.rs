//! Full pages.

pub mod add_school;
pub mod schools;

use super::components::{ButtonVariant, link_button};
use super::layout::{LIST_PATH, page};

/// 404 Not Found page.
#[must_use]
pub fn not_found(path: &str) -> String {
    let content = format!(
        r#"<div class="not-found">
    <h1>404</h1>
    <p class="muted">Page not found</p>
    {home}
</div>"#,
        home = link_button(LIST_PATH, "Go Home", ButtonVariant::Primary),
    );
    page("Not Found", path, None, &content)
}
