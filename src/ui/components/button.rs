//! Button component with variants.

use super::escape;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Outline button.
    Outline,
    /// Subtle ghost button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

/// Anchor styled as a button.
///
/// # Example
///
/// ```rust,ignore
/// link_button("/add-school", "Add School", ButtonVariant::Outline)
/// ```
#[must_use]
pub fn link_button(href: &str, label: &str, variant: ButtonVariant) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape(href),
        variant.classes(),
        escape(label)
    )
}

/// Full-width submit button with an in-flight label.
///
/// HTMX disables the button (`hx-disabled-elt`) while the request runs; the
/// `htmx-request` class swaps the visible label.
#[must_use]
pub fn submit_button(id: &str, label: &str, busy_label: &str) -> String {
    format!(
        r#"<button type="submit" id="{id}" class="{classes} btn-block">
    <span class="idle-label">{label}</span>
    <span class="busy-label">{busy}</span>
</button>"#,
        id = escape(id),
        classes = ButtonVariant::Primary.classes(),
        label = escape(label),
        busy = escape(busy_label),
    )
}
