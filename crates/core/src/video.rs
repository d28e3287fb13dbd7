//! Background video storage modes and upload rules.
//!
//! A video row records how its bytes are kept: as a file under the upload
//! directory, base64-encoded inside the row, or as an external URL only.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default upload size limit (100 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Mime type assumed when nothing better is known.
pub const FALLBACK_VIDEO_MIME: &str = "video/mp4";

/// Known video extensions and their mime types.
const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
    ("ogv", "video/ogg"),
    ("ogg", "video/ogg"),
];

// ---------------------------------------------------------------------------
// Storage mode
// ---------------------------------------------------------------------------

/// Where uploaded video bytes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStorageMode {
    /// Written to the upload directory; the row holds the path.
    Filesystem,
    /// Base64-encoded into the row itself.
    Inline,
    /// Only an external URL is stored; uploads are refused.
    Url,
}

impl VideoStorageMode {
    /// Parse from the `storage` column or the `VIDEO_STORAGE` variable.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "filesystem" => Ok(Self::Filesystem),
            "inline" => Ok(Self::Inline),
            "url" => Ok(Self::Url),
            other => Err(CoreError::Validation(format!(
                "Unknown video storage mode '{other}'. Must be one of: filesystem, inline, url"
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Inline => "inline",
            Self::Url => "url",
        }
    }

    /// Whether this mode accepts uploaded bytes.
    pub fn accepts_uploads(self) -> bool {
        !matches!(self, Self::Url)
    }
}

// ---------------------------------------------------------------------------
// Upload rules
// ---------------------------------------------------------------------------

/// Only `video/*` content types may be uploaded.
pub fn is_video_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("video/")
}

/// Reject uploads above `limit` bytes.
pub fn check_upload_size(size: u64, limit: u64) -> Result<(), CoreError> {
    if size > limit {
        return Err(CoreError::PayloadTooLarge(format!(
            "Video exceeds the upload limit of {limit} bytes"
        )));
    }
    Ok(())
}

/// Lower-cased extension of a file name or URL path, without the dot.
pub fn extension_of(name: &str) -> Option<String> {
    let path = name.split(['?', '#']).next().unwrap_or(name);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Build the on-disk name for an upload: `video-{millis}-{nonce}[.ext]`.
///
/// Only the extension of the visitor-supplied name survives, so the stored
/// name never contains path separators.
pub fn stored_file_name(original_name: &str, millis: i64, nonce: u32) -> String {
    match extension_of(original_name) {
        Some(ext) => format!("video-{millis}-{nonce}.{ext}"),
        None => format!("video-{millis}-{nonce}"),
    }
}

/// Best-effort mime type for a video referenced by URL.
pub fn guess_mime_from_url(url: &str) -> &'static str {
    extension_of(url)
        .and_then(|ext| {
            EXTENSION_MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(FALLBACK_VIDEO_MIME)
}
