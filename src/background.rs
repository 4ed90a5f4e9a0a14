//! Background selection: the built-in gallery, the current backdrop, and
//! validated user uploads.
//!
//! DESIGN
//! ======
//! Built-ins are loaded from embedded data and never re-validated. A
//! user-supplied image is validated in a fixed order (type, size, decode,
//! dimensions), held only for the session, and occupies a single gallery
//! slot: a later upload replaces that slot without touching a custom
//! background already applied as current.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use image::GenericImageView;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{MAX_UPLOAD_BYTES, MIN_BACKGROUND_HEIGHT, MIN_BACKGROUND_WIDTH};

/// Built-in gallery data shipped with the crate.
const GALLERY_JSON: &str = include_str!("../assets/backgrounds.json");

/// A canvas backdrop: a built-in room photo or a user upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub id: String,
    pub name: String,
    /// Reference to the preview-sized asset.
    pub thumbnail: String,
    /// Reference to the full-size asset.
    pub full_image: String,
    /// True for session-local user uploads.
    #[serde(default)]
    pub is_custom: bool,
}

/// Why an uploaded image was rejected. All variants are recoverable; the
/// picker's state is unaffected by a rejected upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("only image files can be used as a background")]
    InvalidFileType,
    #[error("file is {size} bytes, above the 10 MiB limit")]
    FileTooLarge { size: u64 },
    #[error("image is {width}x{height}, minimum is 800x600")]
    ImageTooSmall { width: u32, height: u32 },
    #[error("image could not be decoded")]
    ImageUnreadable,
}

/// Gallery of backdrops and the single "current" selection.
pub struct BackgroundPicker {
    builtins: Vec<Background>,
    custom: Option<Background>,
    current: Option<Background>,
    last_stamp: i128,
}

impl BackgroundPicker {
    /// Create a picker over the built-in gallery shipped with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded gallery data is malformed, which is a
    /// packaging defect rather than a runtime condition.
    #[must_use]
    pub fn new() -> Self {
        let builtins = serde_json::from_str(GALLERY_JSON).expect("embedded gallery is well-formed");
        Self::with_gallery(builtins)
    }

    /// Create a picker over an externally supplied gallery.
    #[must_use]
    pub fn with_gallery(builtins: Vec<Background>) -> Self {
        Self { builtins, custom: None, current: None, last_stamp: 0 }
    }

    /// The backdrop currently applied to the canvas, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Background> {
        self.current.as_ref()
    }

    /// Apply a backdrop. Built-ins are pre-vetted and need no validation.
    pub fn select(&mut self, background: Background) {
        debug!(background = %background.id, "background selected");
        self.current = Some(background);
    }

    /// The gallery as presented to the user: the custom upload slot first
    /// (when occupied), then the built-ins.
    #[must_use]
    pub fn gallery(&self) -> Vec<&Background> {
        self.custom.iter().chain(self.builtins.iter()).collect()
    }

    /// Validate a user-supplied image and place it in the custom gallery
    /// slot. Checks run in order and stop at the first failure: the MIME
    /// type must be an image, the file must fit the 10 MiB ceiling, and the
    /// decoded image must measure at least 800×600.
    ///
    /// A previously uploaded background already applied as current stays
    /// current; only the gallery slot is replaced.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as an [`UploadError`].
    pub fn upload_custom(&mut self, bytes: &[u8], mime_type: &str, size_bytes: u64) -> Result<Background, UploadError> {
        if !mime_type.starts_with("image/") {
            return Err(UploadError::InvalidFileType);
        }
        if size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::FileTooLarge { size: size_bytes });
        }
        let decoded = image::load_from_memory(bytes).map_err(|_| UploadError::ImageUnreadable)?;
        let (width, height) = decoded.dimensions();
        if width < MIN_BACKGROUND_WIDTH || height < MIN_BACKGROUND_HEIGHT {
            return Err(UploadError::ImageTooSmall { width, height });
        }

        let id = format!("custom-{}", self.next_stamp());
        let asset = format!("upload://{id}");
        let background = Background {
            id,
            name: "내 사진".to_string(),
            thumbnail: asset.clone(),
            full_image: asset,
            is_custom: true,
        };
        debug!(background = %background.id, width, height, "custom background accepted");
        self.custom = Some(background.clone());
        Ok(background)
    }

    /// Millisecond timestamp, bumped past the previous one so ids stay
    /// unique even when uploads land in the same millisecond.
    fn next_stamp(&mut self) -> i128 {
        let now_ms = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let stamp = if now_ms > self.last_stamp { now_ms } else { self.last_stamp + 1 };
        self.last_stamp = stamp;
        stamp
    }
}

impl Default for BackgroundPicker {
    fn default() -> Self {
        Self::new()
    }
}
