//! The add-school operation: validate, upload the image, insert the row.

use thiserror::Error;

use super::model::NewSchool;
use super::validation::{FieldErrors, ImageUpload, SchoolForm, validate};
use crate::backend::{BackendError, SchoolStore};

/// Why a submission did not produce a record.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more fields failed validation. No backend call was made.
    #[error("invalid submission: {0}")]
    Invalid(FieldErrors),

    /// The upload or the insert failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Longest file-name extension carried over to the object name.
const MAX_EXTENSION_LEN: usize = 5;

/// Storage object name for an upload: a random stem plus the file's extension.
///
/// The extension is taken from the original file name when it is short and
/// ASCII alphanumeric; otherwise it comes from the MIME type.
pub fn storage_path(image: &ImageUpload) -> String {
    let stem = uuid::Uuid::new_v4();
    match extension(image) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

fn extension(image: &ImageUpload) -> Option<String> {
    let from_name = image
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| {
            (1..=MAX_EXTENSION_LEN).contains(&ext.len())
                && ext.bytes().all(|b| b.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase);

    from_name.or_else(|| {
        let ext = match image.content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            other => *mime_guess::get_mime_extensions_str(other)?.first()?,
        };
        Some(ext.to_string())
    })
}

/// Run the full add-school flow against `store`.
///
/// Returns the inserted payload (with its public image URL) on success.
pub async fn submit(
    store: &dyn SchoolStore,
    form: &SchoolForm,
    image: Option<ImageUpload>,
) -> Result<NewSchool, SubmitError> {
    let validated = validate(form, image).map_err(SubmitError::Invalid)?;
    let mut school = validated.school;
    let image = validated.image;

    let path = storage_path(&image);
    store
        .upload_image(&path, &image.content_type, &image.bytes)
        .await?;

    school.image = Some(store.public_url(&path));
    store.insert_school(&school).await?;

    tracing::info!(
        name: "school.created",
        school = %school.name,
        city = %school.city,
        image_path = %path,
        "School added"
    );
    Ok(school)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use axum::body::Bytes;

    fn image(name: &str, mime: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.into(),
            content_type: mime.into(),
            bytes: Bytes::from_static(b"\x89PNG"),
        }
    }

    #[test]
    fn test_storage_path_keeps_extension() {
        let path = storage_path(&image("campus.photo.webp", "image/webp"));
        assert!(path.ends_with(".webp"));
        assert_eq!(path.len(), 36 + ".webp".len());
    }

    #[test]
    fn test_storage_path_guesses_extension() {
        let path = storage_path(&image("campus", "image/png"));
        assert!(path.ends_with(".png"), "{path}");
    }

    #[test]
    fn test_storage_path_ignores_unsafe_file_name_extension() {
        let hostile = image("front.png/%2e%2e/%2e%2e/other-bucket/evil", "image/png");
        let path = storage_path(&hostile);
        assert!(path.ends_with(".png"), "{path}");
        assert_eq!(path.len(), 36 + ".png".len());
        assert!(
            path.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.'),
            "{path}"
        );

        let jpeg = storage_path(&image("photo.verylongext", "image/jpeg"));
        assert!(jpeg.ends_with(".jpg"), "{jpeg}");

        let upper = storage_path(&image("CAMPUS.PNG", "image/png"));
        assert!(upper.ends_with(".png"), "{upper}");
    }

    #[tokio::test]
    async fn test_invalid_submission_touches_nothing() {
        let store = MemoryStore::new();
        let err = submit(&store, &SchoolForm::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(store.object_count(), 0);
        assert!(store.list_schools().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_uploads_then_inserts() {
        let store = MemoryStore::new();
        let form = SchoolForm {
            name: "Bishop Cotton".into(),
            address: "St Marks Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            contact: "8022213322".into(),
            email_id: "office@bishopcotton.org".into(),
            board: "ICSE".into(),
            school_type: "All Boys".into(),
            hostel_facility: "Yes".into(),
        };

        let created = submit(&store, &form, Some(image("front.png", "image/png")))
            .await
            .unwrap();

        assert_eq!(store.object_count(), 1);
        let rows = store.list_schools().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].image, created.image);
        assert!(
            created
                .image
                .as_deref()
                .is_some_and(|u| u.starts_with("data:image/png;base64,"))
        );
    }
}
