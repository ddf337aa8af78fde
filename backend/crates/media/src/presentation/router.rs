//! Media Router

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::MediaConfig;
use crate::application::upload::MediaStore;
use crate::domain::image::MAX_UPLOAD_BYTES;
use crate::infra::imagekit::ImageKitClient;
use crate::presentation::handlers::{self, MediaAppState};

/// Create the media router with the ImageKit client
pub fn media_router(config: Arc<MediaConfig>) -> Router {
    let store = ImageKitClient::new(config.clone());
    media_router_generic(store, config)
}

/// Create a generic media router for any storage implementation
pub fn media_router_generic<S>(store: S, config: Arc<MediaConfig>) -> Router
where
    S: MediaStore + Clone + Send + Sync + 'static,
{
    let state = MediaAppState {
        store: Arc::new(store),
        config,
    };

    Router::new()
        .route("/", post(handlers::upload::<S>))
        // Headroom over the 10 MiB file ceiling for multipart framing
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        .with_state(state)
}
