//! The `School` entity and everything the application does with it.
//!
//! - [`model`]: record and enum types
//! - [`validation`]: add-school form rules
//! - [`search`]: list filtering
//! - [`submission`]: the upload-then-insert flow

pub mod model;
pub mod search;
pub mod submission;
pub mod validation;

pub use model::{Board, HostelFacility, NewSchool, School, SchoolType};
pub use submission::{SubmitError, submit};
pub use validation::{FieldErrors, ImageUpload, SchoolForm};
