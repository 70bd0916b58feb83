//! Photo upload validation and object naming.
//!
//! Only the content type is sniffed here; the bytes themselves are written by
//! the API layer. Stored objects are laid out as `YYYY/MM/<32 hex>.<ext>` and
//! exposed under [`PUBLIC_PREFIX`].

use chrono::{DateTime, Datelike, Utc};
use rand::RngCore;

/// Default maximum upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// URL prefix under which stored objects are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Accepted image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Webp => "webp",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Webp => "image/webp",
        }
    }
}

/// Detect the image format from leading magic bytes. Returns `None` for
/// anything that is not JPEG, PNG or WebP.
pub fn sniff_image(bytes: &[u8]) -> Option<ImageKind> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageKind::Jpeg)
    } else if bytes.starts_with(PNG) {
        Some(ImageKind::Png)
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some(ImageKind::Webp)
    } else {
        None
    }
}

/// Random 32-character lowercase hex stem for a stored file.
pub fn random_stem() -> String {
    let mut buf = [0u8; 16];
    rand::rng().fill_bytes(&mut buf);
    buf.iter().map(|b| format!("{b:02x}")).collect()
}

/// Where a new upload should be written, relative to the upload root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey {
    /// `YYYY/MM`
    pub directory: String,
    /// `<stem>.<ext>`
    pub file_name: String,
}

impl ObjectKey {
    pub fn new(kind: ImageKind, now: DateTime<Utc>) -> Self {
        Self::with_stem(kind, now, &random_stem())
    }

    fn with_stem(kind: ImageKind, now: DateTime<Utc>, stem: &str) -> Self {
        Self {
            directory: format!("{:04}/{:02}", now.year(), now.month()),
            file_name: format!("{stem}.{}", kind.extension()),
        }
    }

    /// Path relative to the upload root, always `/`-separated.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.directory, self.file_name)
    }

    /// URL stored on luggage rows, e.g. `/uploads/2026/01/ab..ef.jpg`.
    pub fn public_url(&self) -> String {
        format!("{PUBLIC_PREFIX}/{}", self.relative_path())
    }
}
