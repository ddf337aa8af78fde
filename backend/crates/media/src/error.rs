//! Upload Error Types
//!
//! This module provides media-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::fmt;
use thiserror::Error;

/// Media-specific result type alias
pub type MediaResult<T> = Result<T, UploadError>;

/// Classified remote-storage failure, derived from the service's response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// 401/403 from the storage service
    Auth,
    /// 400 from the storage service
    BadRequest,
    /// 413 from the storage service
    PayloadTooLarge,
    /// Anything else (network error, 5xx, unparseable body)
    Other(String),
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "ImageKit authentication failed - check API keys"),
            Self::BadRequest => write!(f, "Invalid image file or upload parameters"),
            Self::PayloadTooLarge => write!(f, "Image file is too large"),
            Self::Other(msg) => write!(f, "Failed to upload image: {msg}"),
        }
    }
}

/// Upload pipeline error variants
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multipart form carried no file part
    #[error("No file provided")]
    MissingFile,

    /// MIME type does not start with image/
    #[error("File must be an image")]
    UnsupportedType { content_type: String },

    /// File exceeds the 10 MiB ceiling
    #[error("File size must be less than 10MB")]
    TooLarge { size: usize },

    /// Malformed multipart form data
    #[error("Invalid multipart form data")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Remote storage rejected or failed the upload
    #[error("{0}")]
    Remote(RemoteFailure),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UploadError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFile
            | UploadError::UnsupportedType { .. }
            | UploadError::TooLarge { .. }
            | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::Remote(_) | UploadError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::MissingFile
            | UploadError::UnsupportedType { .. }
            | UploadError::TooLarge { .. }
            | UploadError::Multipart(_) => ErrorKind::BadRequest,
            UploadError::Remote(_) | UploadError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UploadError::Remote(reason) => {
                tracing::error!(reason = %reason, "Remote storage upload failed");
            }
            UploadError::Internal(msg) => {
                tracing::error!(message = %msg, "Upload internal error");
            }
            UploadError::UnsupportedType { content_type } => {
                tracing::debug!(content_type = %content_type, "Rejected non-image upload");
            }
            UploadError::TooLarge { size } => {
                tracing::debug!(size = size, "Rejected oversized upload");
            }
            _ => {
                tracing::debug!(error = %self, "Upload error");
            }
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(
            UploadError::MissingFile.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UploadError::UnsupportedType {
                content_type: "text/plain".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UploadError::TooLarge { size: 11 << 20 }.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_remote_failures_are_500() {
        assert_eq!(
            UploadError::Remote(RemoteFailure::Auth).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_remote_failure_messages() {
        assert!(
            UploadError::Remote(RemoteFailure::Auth)
                .to_string()
                .contains("authentication failed")
        );
        assert!(
            UploadError::Remote(RemoteFailure::PayloadTooLarge)
                .to_string()
                .contains("too large")
        );
    }
}
