//! Photo selection for activity and team uploads.

use base64::Engine;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Most photos a single activity may carry.
pub const MAX_PHOTOS: usize = 10;

/// MIME types the backend accepts for images.
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Why a photo selection was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// At least one file is not a supported image; nothing was added.
    #[error("unsupported file format: {}; only JPG, PNG and GIF are allowed", .names.join(", "))]
    UnsupportedFormat { names: Vec<String> },

    /// The batch is already full.
    #[error("at most {max} photos are allowed")]
    LimitReached { max: usize },
}

/// A file picked by the user, held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PhotoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PhotoFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_supported(&self) -> bool {
        ALLOWED_MIME_TYPES.contains(&self.mime.to_ascii_lowercase().as_str())
    }

    /// Inline preview as a `data:` URL.
    pub fn preview_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.mime)
    }

    /// A fresh multipart part built from owned bytes, so every submission
    /// sends its own copy of the file.
    pub(crate) fn to_part(&self) -> reqwest::Result<Part> {
        Part::bytes(self.bytes.clone())
            .file_name(self.name.clone())
            .mime_str(&self.mime)
    }
}

/// Result of adding files to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub accepted: usize,
    pub offered: usize,
}

impl AddOutcome {
    /// True when some offered files did not fit.
    pub fn truncated(&self) -> bool {
        self.accepted < self.offered
    }

    /// Notice for the user when the batch was cut short.
    pub fn notice(&self) -> Option<String> {
        self.truncated().then(|| {
            format!(
                "added {} of {} photos; at most {MAX_PHOTOS} photos are allowed",
                self.accepted, self.offered
            )
        })
    }
}

/// Ordered photos attached to an activity before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoBatch {
    photos: Vec<PhotoFile>,
}

impl PhotoBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photos(&self) -> &[PhotoFile] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_PHOTOS.saturating_sub(self.photos.len())
    }

    /// Add a selection. Any unsupported file rejects the whole selection; a
    /// selection larger than the free slots is truncated to fit.
    pub fn add(&mut self, files: Vec<PhotoFile>) -> Result<AddOutcome, UploadError> {
        let offered = files.len();
        if offered == 0 {
            return Ok(AddOutcome {
                accepted: 0,
                offered,
            });
        }

        let invalid: Vec<String> = files
            .iter()
            .filter(|f| !f.is_supported())
            .map(|f| f.name.clone())
            .collect();
        if !invalid.is_empty() {
            return Err(UploadError::UnsupportedFormat { names: invalid });
        }

        let slots = self.remaining_slots();
        if slots == 0 {
            return Err(UploadError::LimitReached { max: MAX_PHOTOS });
        }

        let accepted: Vec<PhotoFile> = files.into_iter().take(slots).collect();
        let outcome = AddOutcome {
            accepted: accepted.len(),
            offered,
        };
        self.photos.extend(accepted);
        debug!(
            accepted = outcome.accepted,
            offered, "added photos to batch"
        );
        Ok(outcome)
    }

    /// Remove the photo at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<PhotoFile> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    pub fn previews(&self) -> Vec<String> {
        self.photos.iter().map(PhotoFile::preview_data_url).collect()
    }

    /// Append every photo to `form` under `field`.
    pub(crate) fn attach(&self, mut form: Form, field: &str) -> reqwest::Result<Form> {
        for photo in &self.photos {
            form = form.part(field.to_string(), photo.to_part()?);
        }
        Ok(form)
    }
}

/// Check a single image (team avatar) before upload.
pub fn check_image(file: &PhotoFile) -> Result<(), UploadError> {
    if file.is_supported() {
        Ok(())
    } else {
        Err(UploadError::UnsupportedFormat {
            names: vec![file.name.clone()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> PhotoFile {
        PhotoFile::new(name, "image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn test_any_unsupported_file_rejects_all() {
        let mut batch = PhotoBatch::new();
        let err = batch
            .add(vec![
                jpeg("a.jpg"),
                PhotoFile::new("b.heic", "image/heic", vec![1]),
                PhotoFile::new("c.pdf", "application/pdf", vec![2]),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedFormat {
                names: vec!["b.heic".to_string(), "c.pdf".to_string()]
            }
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_oversized_batch_is_truncated() {
        let mut batch = PhotoBatch::new();
        batch.add(vec![jpeg("0.jpg"), jpeg("1.jpg")]).unwrap();
        assert_eq!(batch.remaining_slots(), 8);

        let files = (0..10).map(|i| jpeg(&format!("n{i}.jpg"))).collect();
        let outcome = batch.add(files).unwrap();
        assert_eq!(outcome.accepted, 8);
        assert_eq!(outcome.offered, 10);
        assert!(outcome.truncated());
        assert!(outcome.notice().unwrap().contains("added 8 of 10"));
        assert_eq!(batch.len(), MAX_PHOTOS);
        assert_eq!(batch.photos()[9].name, "n7.jpg");
    }

    #[test]
    fn test_full_batch_refuses_more() {
        let mut batch = PhotoBatch::new();
        batch
            .add((0..10).map(|i| jpeg(&format!("{i}.jpg"))).collect())
            .unwrap();
        assert_eq!(
            batch.add(vec![jpeg("x.jpg")]).unwrap_err(),
            UploadError::LimitReached { max: 10 }
        );
    }

    #[test]
    fn test_mime_check_is_case_insensitive() {
        assert!(PhotoFile::new("a.PNG", "IMAGE/PNG", vec![]).is_supported());
        assert!(PhotoFile::new("a.gif", "image/gif", vec![]).is_supported());
        assert!(check_image(&PhotoFile::new("a.webp", "image/webp", vec![])).is_err());
    }

    #[test]
    fn test_remove_and_previews() {
        let mut batch = PhotoBatch::new();
        batch.add(vec![jpeg("a.jpg"), jpeg("b.jpg")]).unwrap();
        assert_eq!(batch.remove(0).unwrap().name, "a.jpg");
        assert!(batch.remove(5).is_none());
        assert_eq!(batch.previews(), vec!["data:image/jpeg;base64,/9j/"]);
    }
}
