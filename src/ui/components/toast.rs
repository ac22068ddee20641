//! Notification banner shown after an operation.

use super::escape;

/// Toast visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failure notification.
    Destructive,
}

/// A title/description notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let (class, role) = match self.variant {
            ToastVariant::Default => ("toast", "status"),
            ToastVariant::Destructive => ("toast toast-destructive", "alert"),
        };
        format!(
            r#"<div class="{class}" role="{role}">
    <p class="toast-title">{title}</p>
    <p class="toast-description">{description}</p>
</div>"#,
            title = escape(&self.title),
            description = escape(&self.description),
        )
    }
}
