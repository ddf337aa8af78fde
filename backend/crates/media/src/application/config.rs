//! Application Configuration
//!
//! Configuration for the media pipeline and the remote storage account.

/// Media application configuration
#[derive(Clone)]
pub struct MediaConfig {
    /// Storage account public key (client-side widgets, health reporting)
    pub public_key: String,
    /// Storage account private key (server-side upload auth)
    pub private_key: String,
    /// Public URL endpoint the stored files are served from
    pub url_endpoint: String,
    /// Upload API URL
    pub upload_api: String,
    /// File management API base URL (deletes)
    pub files_api: String,
    /// Folder uploads land in when the form does not name one
    pub base_folder: String,
    /// Runtime kill switch for the transcode step
    pub optimize: bool,
}

impl MediaConfig {
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        url_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            url_endpoint: url_endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: String::new(),
            url_endpoint: String::new(),
            upload_api: "https://upload.imagekit.io/api/v1/files/upload".to_string(),
            files_api: "https://api.imagekit.io/v1/files".to_string(),
            base_folder: "ethnospark".to_string(),
            optimize: true,
        }
    }
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("url_endpoint", &self.url_endpoint)
            .field("upload_api", &self.upload_api)
            .field("base_folder", &self.base_folder)
            .field("optimize", &self.optimize)
            .finish()
    }
}
