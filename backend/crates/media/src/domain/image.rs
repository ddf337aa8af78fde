//! Image Upload Value Object
//!
//! Validates the raw multipart payload at construction: presence, MIME
//! family, and size ceiling. Nothing downstream (transcode, network)
//! runs until an `ImageUpload` exists, so rejection always happens first.

use crate::error::{MediaResult, UploadError};

/// Upload size ceiling (10 MiB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A validated image payload
#[derive(Clone)]
pub struct ImageUpload {
    bytes: Vec<u8>,
    /// File name stem (extension stripped), remote-storage friendly
    name: String,
    content_type: String,
}

impl ImageUpload {
    /// Validate and wrap a multipart file part
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> MediaResult<Self> {
        if bytes.is_empty() {
            return Err(UploadError::MissingFile);
        }

        let content_type = content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(UploadError::UnsupportedType { content_type });
        }

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge { size: bytes.len() });
        }

        Ok(Self {
            bytes,
            name: file_stem(file_name.as_deref()),
            content_type,
        })
    }

    /// File name stem used for the stored object
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Everything before the first dot, falling back to "image"
fn file_stem(file_name: Option<&str>) -> String {
    let stem = file_name
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("")
        .trim();

    if stem.is_empty() {
        "image".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_name() -> Option<String> {
        Some("banner.png".to_string())
    }

    #[test]
    fn test_valid_upload() {
        let upload = ImageUpload::new(
            png_name(),
            Some("image/png".to_string()),
            vec![0u8; 1024],
        )
        .unwrap();
        assert_eq!(upload.name(), "banner");
        assert_eq!(upload.content_type(), "image/png");
        assert_eq!(upload.size(), 1024);
    }

    #[test]
    fn test_empty_payload_is_missing_file() {
        let result = ImageUpload::new(png_name(), Some("image/png".to_string()), vec![]);
        assert!(matches!(result, Err(UploadError::MissingFile)));
    }

    #[test]
    fn test_non_image_mime_rejected() {
        let result = ImageUpload::new(
            Some("notes.pdf".to_string()),
            Some("application/pdf".to_string()),
            vec![0u8; 10],
        );
        assert!(matches!(
            result,
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_missing_mime_rejected() {
        let result = ImageUpload::new(png_name(), None, vec![0u8; 10]);
        assert!(matches!(
            result,
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_exactly_at_ceiling_accepted() {
        let result = ImageUpload::new(
            png_name(),
            Some("image/png".to_string()),
            vec![0u8; MAX_UPLOAD_BYTES],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_over_ceiling_rejected() {
        let result = ImageUpload::new(
            png_name(),
            Some("image/png".to_string()),
            vec![0u8; MAX_UPLOAD_BYTES + 1],
        );
        assert!(matches!(result, Err(UploadError::TooLarge { .. })));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Some("photo.final.jpg")), "photo");
        assert_eq!(file_stem(Some("no-extension")), "no-extension");
        assert_eq!(file_stem(Some(".hidden")), "image");
        assert_eq!(file_stem(Some("")), "image");
        assert_eq!(file_stem(None), "image");
    }

    #[test]
    fn test_debug_omits_payload() {
        let upload = ImageUpload::new(
            png_name(),
            Some("image/png".to_string()),
            vec![0xAB; 64],
        )
        .unwrap();
        let debug = format!("{upload:?}");
        assert!(debug.contains("banner"));
        assert!(!debug.contains("171")); // no byte dump
    }
}
