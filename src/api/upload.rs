//! Multipart parsing for the add-school form.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::school::validation::{ImageUpload, SchoolForm, field};

/// Read every part of an add-school submission.
///
/// Text parts fill the form by name; the first `image` part becomes the
/// upload. On a multipart error the fields read so far are returned with it
/// so the form can be re-rendered. A body over the request limit fails on
/// the first read, so the form comes back empty in that case.
pub async fn read_submission(
    mut multipart: Multipart,
) -> (SchoolForm, Result<Option<ImageUpload>, MultipartError>) {
    let mut form = SchoolForm::default();
    let mut image = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return (form, Err(e)),
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == field::IMAGE {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .map_or_else(|| "application/octet-stream".to_string(), str::to_string);

            let bytes = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => return (form, Err(e)),
            };

            if image.is_none() {
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            continue;
        }

        match field.text().await {
            Ok(value) => form.set(&name, value),
            Err(e) => return (form, Err(e)),
        }
    }

    if let Some(img) = &image {
        tracing::debug!(
            name: "school.submit.image",
            file_name = %img.file_name,
            content_type = %img.content_type,
            size = img.bytes.len(),
            "Received school image"
        );
    }

    (form, Ok(image))
}
