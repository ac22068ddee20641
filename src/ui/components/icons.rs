//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility.

/// Common icon size class.
const ICON_SIZE: &str = "icon";

fn svg(class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{ICON_SIZE} {class}" aria-hidden="true">{body}</svg>"#
    )
}

/// Graduation cap icon used by the brand link.
#[must_use]
pub fn graduation_cap_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z"/><path d="M22 10v6"/><path d="M6 12.5V16a6 3 0 0 0 12 0v-3.5"/>"#,
    )
}

/// Map pin icon.
#[must_use]
pub fn map_pin_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"/><circle cx="12" cy="10" r="3"/>"#,
    )
}

/// Search/magnifier icon.
#[must_use]
pub fn search_icon(class: &str) -> String {
    svg(
        class,
        r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
    )
}
