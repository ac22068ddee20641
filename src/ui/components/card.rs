//! Card component with header and content.
//!
//! Bodies are already-rendered HTML; callers escape their own text.

/// Card container.
#[must_use]
pub fn card(class: &str, body: &str) -> String {
    format!(r#"<div class="card {class}">{body}</div>"#)
}

/// Card header section.
#[must_use]
pub fn card_header(body: &str) -> String {
    format!(r#"<div class="card-header">{body}</div>"#)
}

/// Card content section.
#[must_use]
pub fn card_content(body: &str) -> String {
    format!(r#"<div class="card-content">{body}</div>"#)
}
