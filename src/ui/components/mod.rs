//! ShadCN-style reusable UI components.
//!
//! Components render to HTML strings on the server. Every piece of
//! user-supplied text passes through [`escape`] before it is interpolated.
//!
//! # Components
//!
//! - [`button`]: link and submit buttons with variants
//! - [`card`]: card container with header and content
//! - [`input`]: labelled text, select and file fields with error messages
//! - [`badge`]: status badge/tag
//! - [`toast`]: page notification banner
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;
mod input;
mod toast;

pub use badge::{BadgeVariant, badge};
pub use button::{ButtonVariant, link_button, submit_button};
pub use card::{card, card_content, card_header};
pub use icons::*;
pub use input::{FileField, SelectField, TextField};
pub use toast::{Toast, ToastVariant};

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
