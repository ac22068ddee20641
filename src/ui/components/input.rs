//! Labelled form fields with inline validation messages.

use super::escape;

fn message(error: Option<&str>) -> String {
    error.map_or_else(String::new, |e| {
        format!(r#"<p class="form-message">{}</p>"#, escape(e))
    })
}

fn item_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        "form-item has-error"
    } else {
        "form-item"
    }
}

/// Single-line text input.
///
/// # Example
///
/// ```rust,ignore
/// TextField {
///     name: "city",
///     label: "City *",
///     placeholder: "Enter city",
///     input_type: "text",
///     value: &form.city,
///     error: errors.get("city"),
/// }
/// .render()
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub input_type: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

impl TextField<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<div class="{class}">
    <label for="{name}" class="form-label">{label}</label>
    <input type="{ty}" id="{name}" name="{name}" class="input" placeholder="{placeholder}" value="{value}" autocomplete="off">
    {message}
</div>"#,
            class = item_class(self.error),
            name = escape(self.name),
            label = escape(self.label),
            ty = escape(self.input_type),
            placeholder = escape(self.placeholder),
            value = escape(self.value),
            message = message(self.error),
        )
    }
}

/// Native select with a disabled placeholder option.
#[derive(Debug, Clone, Copy)]
pub struct SelectField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub options: &'a [&'a str],
    pub selected: &'a str,
    pub error: Option<&'a str>,
}

impl SelectField<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let placeholder_selected = if self.options.contains(&self.selected) {
            ""
        } else {
            " selected"
        };

        let options: String = self
            .options
            .iter()
            .map(|opt| {
                let selected = if *opt == self.selected { " selected" } else { "" };
                format!(
                    r#"<option value="{v}"{selected}>{v}</option>"#,
                    v = escape(opt)
                )
            })
            .collect();

        format!(
            r#"<div class="{class}">
    <label for="{name}" class="form-label">{label}</label>
    <select id="{name}" name="{name}" class="input">
        <option value="" disabled{placeholder_selected}>{placeholder}</option>
        {options}
    </select>
    {message}
</div>"#,
            class = item_class(self.error),
            name = escape(self.name),
            label = escape(self.label),
            placeholder = escape(self.placeholder),
            message = message(self.error),
        )
    }
}

/// File input. Browsers never re-populate file inputs, so there is no value.
#[derive(Debug, Clone, Copy)]
pub struct FileField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub accept: &'a str,
    pub error: Option<&'a str>,
}

impl FileField<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<div class="{class}">
    <label for="{name}" class="form-label">{label}</label>
    <input type="file" id="{name}" name="{name}" class="input" accept="{accept}">
    {message}
</div>"#,
            class = item_class(self.error),
            name = escape(self.name),
            label = escape(self.label),
            accept = escape(self.accept),
            message = message(self.error),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_escapes_value_and_shows_error() {
        let html = TextField {
            name: "name",
            label: "School Name *",
            placeholder: "Enter school name",
            input_type: "text",
            value: r#""><script>"#,
            error: Some("School name must be at least 2 characters"),
        }
        .render();

        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(html.contains("form-item has-error"));
        assert!(html.contains("School name must be at least 2 characters"));
    }

    #[test]
    fn test_select_marks_selected_option() {
        let html = SelectField {
            name: "board",
            label: "Board *",
            placeholder: "Select board",
            options: &["ICSE", "CBSE"],
            selected: "CBSE",
            error: None,
        }
        .render();

        assert!(html.contains(r#"<option value="CBSE" selected>CBSE</option>"#));
        assert!(html.contains(r#"<option value="" disabled>Select board</option>"#));
        assert!(!html.contains("form-message"));
    }

    #[test]
    fn test_select_defaults_to_placeholder() {
        let html = SelectField {
            name: "type",
            label: "School Type *",
            placeholder: "Select type",
            options: &["Co-ed"],
            selected: "",
            error: Some("Please select school type"),
        }
        .render();

        assert!(html.contains(r#"<option value="" disabled selected>Select type</option>"#));
        assert!(html.contains("Please select school type"));
    }
}
