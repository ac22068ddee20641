//! Declarative validation of the add-school form.
//!
//! Every field is checked and all failures are collected, one message per
//! field. Within a field the first failing rule wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use axum::body::Bytes;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::{Board, HostelFacility, NewSchool, SchoolType};

/// Maximum accepted image size in bytes (5MB).
pub const MAX_IMAGE_BYTES: usize = 5_000_000;

/// Accepted image MIME types.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Form field names, shared by the validator and the form renderer.
pub mod field {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const CONTACT: &str = "contact";
    pub const EMAIL: &str = "email_id";
    pub const BOARD: &str = "board";
    pub const TYPE: &str = "type";
    pub const HOSTEL: &str = "hostel_facility";
    pub const IMAGE: &str = "image";
}

/// Raw text fields as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub board: String,
    #[serde(rename = "type")]
    pub school_type: String,
    pub hostel_facility: String,
}

impl SchoolForm {
    /// Set a field by its form name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            field::NAME => self.name = value,
            field::ADDRESS => self.address = value,
            field::CITY => self.city = value,
            field::STATE => self.state = value,
            field::CONTACT => self.contact = value,
            field::EMAIL => self.email_id = value,
            field::BOARD => self.board = value,
            field::TYPE => self.school_type = value,
            field::HOSTEL => self.hostel_facility = value,
            _ => {}
        }
    }
}

/// An uploaded image file.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// A file input left empty still posts a nameless, zero-length part.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&joined.join("; "))
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    /// Insert payload; `image` is filled in once the upload succeeds.
    pub school: NewSchool,
    pub image: ImageUpload,
}

fn check_length(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        errors.insert(field, format!("{label} must be at least {min} characters"));
    } else if len > max {
        errors.insert(field, format!("{label} must be at most {max} characters"));
    }
}

/// Check an image against the size and MIME rules.
pub fn validate_image(image: Option<&ImageUpload>) -> Result<(), &'static str> {
    let Some(image) = image.filter(|i| !i.is_empty()) else {
        return Err("Please select an image");
    };
    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err("Max file size is 5MB");
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        return Err("Only .jpg, .jpeg, .png and .webp formats are supported");
    }
    Ok(())
}

/// Validate a form submission.
pub fn validate(
    form: &SchoolForm,
    image: Option<ImageUpload>,
) -> Result<ValidatedSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    check_length(&mut errors, field::NAME, "School name", &form.name, 2, 100);
    check_length(&mut errors, field::ADDRESS, "Address", &form.address, 5, 200);
    check_length(&mut errors, field::CITY, "City", &form.city, 2, 50);
    check_length(&mut errors, field::STATE, "State", &form.state, 2, 50);

    if !CONTACT_RE.is_match(&form.contact) {
        errors.insert(field::CONTACT, "Contact must be a 10-digit number");
    }

    let email = &form.email_id;
    if email.starts_with('.') || email.contains("..") || !EMAIL_RE.is_match(email) {
        errors.insert(field::EMAIL, "Invalid email address");
    } else if email.chars().count() > 100 {
        errors.insert(field::EMAIL, "Email must be at most 100 characters");
    }

    let board = form.board.parse::<Board>().ok();
    if board.is_none() {
        errors.insert(field::BOARD, "Please select a board");
    }
    let school_type = form.school_type.parse::<SchoolType>().ok();
    if school_type.is_none() {
        errors.insert(field::TYPE, "Please select school type");
    }
    let hostel = form.hostel_facility.parse::<HostelFacility>().ok();
    if hostel.is_none() {
        errors.insert(field::HOSTEL, "Please select hostel facility");
    }

    if let Err(message) = validate_image(image.as_ref()) {
        errors.insert(field::IMAGE, message);
    }

    match (board, school_type, hostel, image) {
        (Some(board), Some(school_type), Some(hostel_facility), Some(image))
            if errors.is_empty() =>
        {
            Ok(ValidatedSubmission {
                school: NewSchool {
                    name: form.name.clone(),
                    address: form.address.clone(),
                    city: form.city.clone(),
                    state: form.state.clone(),
                    contact: form.contact.clone(),
                    email_id: form.email_id.clone(),
                    board,
                    school_type,
                    hostel_facility,
                    image: None,
                },
                image,
            })
        }
        _ => Err(errors),
    }
}
