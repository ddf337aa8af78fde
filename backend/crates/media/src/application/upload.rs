//! Upload Use Case
//!
//! Orchestrates the pipeline: the payload is already validated (the
//! [`ImageUpload`] value object cannot exist otherwise), so this step
//! optionally transcodes and then hands the bytes to the storage client.
//! A failed transcode degrades to the original bytes, never to an error.

use std::sync::Arc;

use crate::application::config::MediaConfig;
use crate::domain::image::ImageUpload;
use crate::error::MediaResult;
use crate::infra::optimize;

/// Successful upload, as reported by the remote storage service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Public URL of the stored object
    pub url: String,
    /// Storage-side identifier (for later deletes)
    pub file_id: String,
    /// Final stored name (the service may uniquify it)
    pub name: String,
}

/// Remote object storage client
#[trait_variant::make(MediaStore: Send)]
pub trait LocalMediaStore {
    /// Store bytes under `folder` with a collision-safe name
    async fn store(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> MediaResult<UploadResult>;

    /// Delete a stored object; failure logs and reports false
    async fn delete(&self, file_id: &str) -> bool;
}

/// Upload input
pub struct UploadInput {
    pub image: ImageUpload,
    /// Target folder; blank or absent falls back to the configured base
    pub folder: Option<String>,
}

/// Upload use case
pub struct UploadUseCase<S>
where
    S: MediaStore,
{
    store: Arc<S>,
    config: Arc<MediaConfig>,
}

impl<S> UploadUseCase<S>
where
    S: MediaStore,
{
    pub fn new(store: Arc<S>, config: Arc<MediaConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: UploadInput) -> MediaResult<UploadResult> {
        let folder = input
            .folder
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| self.config.base_folder.clone());

        let stem = input.image.name().to_string();
        let original_size = input.image.size();

        let (bytes, file_name) = if self.config.optimize {
            match optimize::transcode(input.image.bytes()) {
                Some(transcoded) => {
                    tracing::debug!(
                        original_size = original_size,
                        optimized_size = transcoded.bytes.len(),
                        "Image optimized"
                    );
                    let name = format!("{stem}.{}", transcoded.extension);
                    (transcoded.bytes, name)
                }
                None => {
                    tracing::warn!("Image optimization unavailable, uploading original bytes");
                    (input.image.into_bytes(), stem)
                }
            }
        } else {
            (input.image.into_bytes(), stem)
        };

        let result = self.store.store(bytes, &file_name, &folder).await?;

        tracing::info!(
            url = %result.url,
            file_id = %result.file_id,
            folder = %folder,
            "Image uploaded"
        );

        Ok(result)
    }
}
