//! In-memory picture attached to a draft listing.

use std::path::Path;

use bytes::Bytes;
use mime_guess::mime;
use thiserror::Error;

const FALLBACK_FILE_NAME: &str = "image";

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("`{file_name}` is not an image (accepted: image/*)")]
    NotAnImage { file_name: String },
}

/// A picture selected for upload. Only the `image/*` accept filter is
/// enforced; size and dimensions are left to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingImage {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl ListingImage {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Bytes) -> Result<Self, ImageError> {
        let file_name = file_name.into();
        let guessed = mime_guess::from_path(&file_name).first();
        match guessed {
            Some(kind) if kind.type_() == mime::IMAGE => Ok(Self {
                content_type: kind.essence_str().to_string(),
                file_name,
                bytes,
            }),
            _ => Err(ImageError::NotAnImage { file_name }),
        }
    }

    pub async fn load(path: &Path) -> Result<Self, ImageError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
        // Check the extension before touching the disk.
        if mime_guess::from_path(&file_name)
            .first()
            .is_none_or(|kind| kind.type_() != mime::IMAGE)
        {
            return Err(ImageError::NotAnImage { file_name });
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|source| ImageError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_bytes(file_name, Bytes::from(data))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
