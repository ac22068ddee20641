//! Badge component for status indicators and tags.

use super::escape;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Secondary badge.
    Secondary,
    /// Outline badge.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "badge badge-default",
            Self::Secondary => "badge badge-secondary",
            Self::Outline => "badge badge-outline",
        }
    }
}

/// Badge for displaying a short label.
#[must_use]
pub fn badge(text: &str, variant: BadgeVariant) -> String {
    format!(
        r#"<span class="{}">{}</span>"#,
        variant.classes(),
        escape(text)
    )
}
