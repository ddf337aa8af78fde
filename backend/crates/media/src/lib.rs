//! Media Backend Module
//!
//! The image upload pipeline: multipart intake → validation → optional
//! transcode/resize → upload to remote object storage → public URL.
//!
//! The pipeline has no knowledge of which entity will reference the
//! resulting URL; callers persist it themselves.
//!
//! Clean Architecture structure:
//! - `domain/` - The validated upload value object
//! - `application/` - Upload use case, storage trait, config
//! - `infra/` - ImageKit HTTP client, image optimizer
//! - `presentation/` - Multipart handler, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MediaConfig;
pub use application::upload::{MediaStore, UploadResult, UploadUseCase};
pub use error::{MediaResult, UploadError};
pub use infra::imagekit::ImageKitClient;
pub use presentation::router::media_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
