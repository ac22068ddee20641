//! Add-school form page.

use crate::school::validation::{FieldErrors, SchoolForm, field};
use crate::school::{Board, HostelFacility, SchoolType};
use crate::ui::components::{FileField, SelectField, TextField, Toast, submit_button};
use crate::ui::layout::{ADD_PATH, page};

/// Render the form with previously entered values and any field errors.
#[must_use]
pub fn render(form: &SchoolForm, errors: &FieldErrors, toast: Option<&Toast>) -> String {
    let text = |name: &str, label: &str, placeholder: &str, input_type: &str, value: &str| {
        TextField {
            name,
            label,
            placeholder,
            input_type,
            value,
            error: errors.get(name),
        }
        .render()
    };

    let boards = Board::ALL.map(Board::as_str);
    let types = SchoolType::ALL.map(SchoolType::as_str);
    let hostel = HostelFacility::ALL.map(HostelFacility::as_str);

    let select = |name: &str, label: &str, placeholder: &str, options: &[&str], selected: &str| {
        SelectField {
            name,
            label,
            placeholder,
            options,
            selected,
            error: errors.get(name),
        }
        .render()
    };

    let content = format!(
        r#"<div class="narrow">
    <div class="page-heading">
        <h1>Add New School</h1>
        <p class="muted">Fill in the details to add a school to the directory</p>
    </div>
    <div class="panel">
        <form class="school-form" method="post" action="{ADD_PATH}" enctype="multipart/form-data"
              hx-boost="true" hx-disabled-elt="find button[type='submit']">
            {name}
            {address}
            <div class="grid-2">
                {city}
                {state}
            </div>
            <div class="grid-2">
                {contact}
                {email}
            </div>
            <div class="grid-3">
                {board}
                {school_type}
                {hostel}
            </div>
            {image}
            {submit}
        </form>
    </div>
</div>"#,
        name = text(field::NAME, "School Name *", "Enter school name", "text", &form.name),
        address = text(field::ADDRESS, "Address *", "Enter address", "text", &form.address),
        city = text(field::CITY, "City *", "Enter city", "text", &form.city),
        state = text(field::STATE, "State *", "Enter state", "text", &form.state),
        contact = text(field::CONTACT, "Contact Number *", "10-digit number", "tel", &form.contact),
        email = text(field::EMAIL, "Email *", "school@example.com", "text", &form.email_id),
        board = select(field::BOARD, "Board *", "Select board", &boards, &form.board),
        school_type = select(field::TYPE, "School Type *", "Select type", &types, &form.school_type),
        hostel = select(
            field::HOSTEL,
            "Hostel Facility *",
            "Select option",
            &hostel,
            &form.hostel_facility
        ),
        image = FileField {
            name: field::IMAGE,
            label: "School Image *",
            accept: "image/*",
            error: errors.get(field::IMAGE),
        }
        .render(),
        submit = submit_button("submit-school", "Add School", "Adding School..."),
    );

    page("Add School", ADD_PATH, toast, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_has_every_field() {
        let html = render(&SchoolForm::default(), &FieldErrors::default(), None);
        for name in [
            field::NAME,
            field::ADDRESS,
            field::CITY,
            field::STATE,
            field::CONTACT,
            field::EMAIL,
            field::BOARD,
            field::TYPE,
            field::HOSTEL,
            field::IMAGE,
        ] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "{name}");
        }
        assert!(html.contains("Add New School"));
        assert!(html.contains("Adding School..."));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(!html.contains("form-message"));
    }

    #[test]
    fn test_rerender_keeps_values() {
        let form = SchoolForm {
            city: "Kochi".into(),
            board: "IB".into(),
            ..SchoolForm::default()
        };
        let html = render(&form, &FieldErrors::default(), None);
        assert!(html.contains(r#"value="Kochi""#));
        assert!(html.contains(r#"<option value="IB" selected>IB</option>"#));
    }
}
