//! Selected-image model and upload validation.
//!
//! All three input modalities (drag-and-drop, file picker, clipboard
//! paste) are normalized into an [`ImageCandidate`] by `snapclass-io`
//! and funneled through [`SelectedImage::from_candidate`], so the
//! acceptance rules live in exactly one place.

use thiserror::Error;

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A file offered by one of the input modalities, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Declared MIME type. May be empty when the browser provides none.
    pub mime: String,
    /// Original filename. Pasted images carry a browser-assigned name.
    pub name: String,
}

impl ImageCandidate {
    /// Size of the candidate in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Why a candidate was rejected.
///
/// The `Display` strings are shown to the user verbatim in the error
/// banner, so they are phrased as instructions rather than diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Declared MIME type does not begin with `image/`.
    #[error("Please select a valid image file")]
    NotAnImage,

    /// File exceeds [`MAX_UPLOAD_BYTES`].
    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// The single validated image awaiting prediction.
///
/// At most one exists at a time. It is owned by the root component and
/// replaced wholesale by the next successful selection; rejection of a
/// later candidate leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    bytes: Vec<u8>,
    mime: String,
    name: String,
}

impl SelectedImage {
    /// Validate a candidate and commit it as the selected image.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotAnImage`] when the declared MIME
    /// type does not start with `image/`, and [`SelectionError::TooLarge`]
    /// when the payload exceeds [`MAX_UPLOAD_BYTES`].
    pub fn from_candidate(candidate: ImageCandidate) -> Result<Self, SelectionError> {
        if !candidate.mime.starts_with("image/") {
            return Err(SelectionError::NotAnImage);
        }
        if candidate.size() > MAX_UPLOAD_BYTES {
            return Err(SelectionError::TooLarge);
        }
        Ok(Self {
            bytes: candidate.bytes,
            mime: candidate.mime,
            name: candidate.name,
        })
    }

    /// Raw image contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared MIME type, e.g. `image/png`.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Original filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn candidate(mime: &str, size: usize) -> ImageCandidate {
        ImageCandidate {
            bytes: vec![0u8; size],
            mime: mime.to_owned(),
            name: "photo.png".to_owned(),
        }
    }

    #[test]
    fn rejects_non_image_mime() {
        let result = SelectedImage::from_candidate(candidate("text/plain", 16));
        assert_eq!(result, Err(SelectionError::NotAnImage));
    }

    #[test]
    fn rejects_empty_mime() {
        // Some browsers hand over files with no declared type at all.
        let result = SelectedImage::from_candidate(candidate("", 16));
        assert_eq!(result, Err(SelectionError::NotAnImage));
    }

    #[test]
    fn rejects_oversize_image() {
        let result = SelectedImage::from_candidate(candidate("image/jpeg", MAX_UPLOAD_BYTES + 1));
        assert_eq!(result, Err(SelectionError::TooLarge));
    }

    #[test]
    fn accepts_image_at_exact_size_limit() {
        let result = SelectedImage::from_candidate(candidate("image/jpeg", MAX_UPLOAD_BYTES));
        assert!(result.is_ok(), "a file of exactly 10MiB should be accepted");
    }

    #[test]
    fn accepted_image_preserves_payload() {
        let selected = SelectedImage::from_candidate(ImageCandidate {
            bytes: vec![1, 2, 3],
            mime: "image/png".to_owned(),
            name: "cat.png".to_owned(),
        })
        .unwrap();
        assert_eq!(selected.bytes(), &[1, 2, 3]);
        assert_eq!(selected.mime(), "image/png");
        assert_eq!(selected.name(), "cat.png");
        assert_eq!(selected.size(), 3);
    }

    #[test]
    fn error_messages_match_banner_text() {
        assert_eq!(
            SelectionError::NotAnImage.to_string(),
            "Please select a valid image file"
        );
        assert_eq!(
            SelectionError::TooLarge.to_string(),
            "File size must be less than 10MB"
        );
    }
}
