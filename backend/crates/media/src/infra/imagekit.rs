//! ImageKit Storage Client
//!
//! HTTP client for the ImageKit upload and file-management APIs. Auth is
//! HTTP basic with the private key as username and an empty password.

use serde::Deserialize;
use std::sync::Arc;

use crate::application::config::MediaConfig;
use crate::application::upload::{MediaStore, UploadResult};
use crate::error::{MediaResult, RemoteFailure, UploadError};

/// ImageKit-backed media store
#[derive(Clone)]
pub struct ImageKitClient {
    http: reqwest::Client,
    config: Arc<MediaConfig>,
}

impl ImageKitClient {
    pub fn new(config: Arc<MediaConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Classify a non-success upload response
    fn classify(status: reqwest::StatusCode, body: &str) -> RemoteFailure {
        match status.as_u16() {
            401 | 403 => RemoteFailure::Auth,
            400 => RemoteFailure::BadRequest,
            413 => RemoteFailure::PayloadTooLarge,
            _ => RemoteFailure::Other(format!("status {status}: {body}")),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadApiResponse {
    url: String,
    file_id: String,
    name: String,
}

impl MediaStore for ImageKitClient {
    async fn store(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> MediaResult<UploadResult> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("folder", folder.to_string())
            .text("useUniqueFileName", "true");

        let response = self
            .http
            .post(&self.config.upload_api)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Remote(RemoteFailure::Other(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "ImageKit upload rejected");
            return Err(UploadError::Remote(Self::classify(status, &body)));
        }

        let body: UploadApiResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Remote(RemoteFailure::Other(e.to_string())))?;

        Ok(UploadResult {
            url: body.url,
            file_id: body.file_id,
            name: body.name,
        })
    }

    async fn delete(&self, file_id: &str) -> bool {
        let url = format!("{}/{}", self.config.files_api, file_id);

        let result = self
            .http
            .delete(&url)
            .basic_auth(&self.config.private_key, Some(""))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::error!(
                    status = %response.status(),
                    file_id = %file_id,
                    "ImageKit delete failed"
                );
                false
            }
            Err(e) => {
                tracing::error!(error = %e, file_id = %file_id, "ImageKit delete failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_statuses() {
        let s = |code: u16| reqwest::StatusCode::from_u16(code).unwrap();

        assert_eq!(ImageKitClient::classify(s(401), ""), RemoteFailure::Auth);
        assert_eq!(ImageKitClient::classify(s(403), ""), RemoteFailure::Auth);
        assert_eq!(
            ImageKitClient::classify(s(400), ""),
            RemoteFailure::BadRequest
        );
        assert_eq!(
            ImageKitClient::classify(s(413), ""),
            RemoteFailure::PayloadTooLarge
        );
        assert!(matches!(
            ImageKitClient::classify(s(500), "boom"),
            RemoteFailure::Other(_)
        ));
    }

    #[test]
    fn test_upload_response_parses_camel_case() {
        let body: UploadApiResponse = serde_json::from_str(
            r#"{"url":"https://ik.example.com/ethnospark/banner.jpg","fileId":"abc123","name":"banner_x1.jpg","size":12345}"#,
        )
        .unwrap();
        assert_eq!(body.file_id, "abc123");
        assert_eq!(body.name, "banner_x1.jpg");
    }
}
