//! Page shell and navigation bar.

use super::components::{ButtonVariant, Toast, escape, graduation_cap_icon, link_button};

/// Path of the list page.
pub const LIST_PATH: &str = "/";
/// Path of the add-school form.
pub const ADD_PATH: &str = "/add-school";

/// Let HTMX swap the error pages the server renders with a notification:
/// oversized body (413), validation (422) and backend failure (502).
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"413","swap":true},{"code":"422","swap":true},{"code":"502","swap":true},{"code":"[45]..","swap":false,"error":true}]}"#;

/// Navigation bar. The link for `current_path` uses the filled style.
#[must_use]
pub fn navigation(current_path: &str) -> String {
    let variant = |path: &str| {
        if path == current_path {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outline
        }
    };

    format!(
        r#"<nav class="navbar">
    <div class="container navbar-inner">
        <a href="{LIST_PATH}" class="brand">
            {icon}
            <span class="brand-name">School Directory</span>
        </a>
        <div class="nav-links">
            {add}
            {view}
        </div>
    </div>
</nav>"#,
        icon = graduation_cap_icon("icon-lg text-primary"),
        add = link_button(ADD_PATH, "Add School", variant(ADD_PATH)),
        view = link_button(LIST_PATH, "View Schools", variant(LIST_PATH)),
    )
}

/// Full HTML document around `content`.
#[must_use]
pub fn page(title: &str, current_path: &str, toast: Option<&Toast>, content: &str) -> String {
    let toast = toast.map(Toast::render).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Directory of registered schools">
    <meta name="htmx-config" content='{HTMX_CONFIG}'>
    <title>{title} - School Directory</title>

    <!-- Local assets only -->
    <script src="/static/vendor/htmx.min.js" defer></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    {nav}
    <div id="toasts" class="toast-region">{toast}</div>
    <main class="container page">
        {content}
    </main>
</body>
</html>"#,
        title = escape(title),
        nav = navigation(current_path),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_uses_primary_variant() {
        let nav = navigation(ADD_PATH);
        assert!(nav.contains(r#"<a href="/add-school" class="btn btn-primary">Add School</a>"#));
        assert!(nav.contains(r#"<a href="/" class="btn btn-outline">View Schools</a>"#));

        let nav = navigation(LIST_PATH);
        assert!(nav.contains(r#"<a href="/add-school" class="btn btn-outline">Add School</a>"#));
        assert!(nav.contains(r#"<a href="/" class="btn btn-primary">View Schools</a>"#));
    }

    #[test]
    fn test_page_includes_toast() {
        let toast = Toast::error("Error", "Bucket not found");
        let html = page("Add School", ADD_PATH, Some(&toast), "<p>body</p>");
        assert!(html.contains("toast-destructive"));
        assert!(html.contains("Bucket not found"));
        assert!(html.contains("<title>Add School - School Directory</title>"));
    }

    #[test]
    fn test_htmx_swaps_error_pages() {
        let html = page("Add School", ADD_PATH, None, "");
        for code in ["413", "422", "502"] {
            let rule = format!(r#"{{"code":"{code}","swap":true}}"#);
            assert!(html.contains(&rule), "missing swap rule for {code}");
        }
        let catch_all = html.find(r#""[45]..""#).unwrap();
        assert!(html.find(r#""413""#).unwrap() < catch_all);
    }
}
