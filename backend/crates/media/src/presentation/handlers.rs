//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, State};
use std::sync::Arc;

use crate::application::config::MediaConfig;
use crate::application::upload::{MediaStore, UploadInput, UploadUseCase};
use crate::domain::image::ImageUpload;
use crate::error::{MediaResult, UploadError};
use crate::presentation::dto::UploadResponse;

/// Shared state for media handlers
#[derive(Clone)]
pub struct MediaAppState<S>
where
    S: MediaStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<MediaConfig>,
}

/// POST /upload
///
/// Multipart form with a `file` part and an optional `folder` text part.
/// Validation happens while the form is drained; the storage client is
/// only reached with an already-validated payload.
pub async fn upload<S>(
    State(state): State<MediaAppState<S>>,
    mut multipart: Multipart,
) -> MediaResult<Json<UploadResponse>>
where
    S: MediaStore + Clone + Send + Sync + 'static,
{
    let mut file: Option<(Option<String>, Option<String>, Vec<u8>)> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            Some("folder") => {
                folder = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file.ok_or(UploadError::MissingFile)?;
    let image = ImageUpload::new(file_name, content_type, bytes)?;

    let use_case = UploadUseCase::new(state.store.clone(), state.config.clone());
    let result = use_case.execute(UploadInput { image, folder }).await?;

    Ok(Json(UploadResponse::from(result)))
}
