//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::application::upload::UploadResult;

/// Upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub file_id: String,
    pub name: String,
}

impl From<UploadResult> for UploadResponse {
    fn from(result: UploadResult) -> Self {
        Self {
            success: true,
            url: result.url,
            file_id: result.file_id,
            name: result.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let response = UploadResponse::from(UploadResult {
            url: "https://ik.example.com/ethnospark/banner.jpg".to_string(),
            file_id: "abc123".to_string(),
            name: "banner.jpg".to_string(),
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["fileId"], "abc123");
        assert!(json.get("file_id").is_none());
    }
}
