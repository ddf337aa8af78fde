//! Domain Layer

pub mod image;

pub use image::{ImageUpload, MAX_UPLOAD_BYTES};
