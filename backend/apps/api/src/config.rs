//! Process Configuration
//!
//! Every environment variable is read exactly once, here, at startup.
//! Business logic only ever sees the explicit config structs built from
//! this snapshot.

use anyhow::Context;
use auth::config::{AuthConfig, BootstrapAdmin, SameSite};
use media::MediaConfig;
use std::env;

/// Environment snapshot taken at process start
#[derive(Debug, Clone)]
pub struct AppEnv {
    pub database_url: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub jwt_secret: String,
    pub imagekit_public_key: String,
    pub imagekit_private_key: String,
    pub imagekit_url_endpoint: String,
    pub frontend_origins: String,
    /// APP_ENV=production enables the Secure cookie flag
    pub production: bool,
    pub disable_optimize: bool,
}

impl AppEnv {
    /// Read and validate the environment
    ///
    /// Required keys fail fast; the bootstrap admin pair is optional but
    /// must be set together to take effect.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret =
            env::var("JWT_SECRET").context("JWT_SECRET must be set in environment")?;
        anyhow::ensure!(
            jwt_secret.len() >= 32,
            "JWT_SECRET must be at least 32 bytes"
        );

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set in environment")?,
            admin_username: env::var("ADMIN_USERNAME").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            jwt_secret,
            imagekit_public_key: env::var("IMAGEKIT_PUBLIC_KEY")
                .context("IMAGEKIT_PUBLIC_KEY must be set in environment")?,
            imagekit_private_key: env::var("IMAGEKIT_PRIVATE_KEY")
                .context("IMAGEKIT_PRIVATE_KEY must be set in environment")?,
            imagekit_url_endpoint: env::var("IMAGEKIT_URL_ENDPOINT")
                .context("IMAGEKIT_URL_ENDPOINT must be set in environment")?,
            frontend_origins: env::var("FRONTEND_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string()),
            production: env::var("APP_ENV").as_deref() == Ok("production"),
            disable_optimize: env::var("DISABLE_OPTIMIZE").as_deref() == Ok("true"),
        })
    }

    /// Auth configuration for the token issuer, cookie, and bootstrap
    pub fn auth_config(&self) -> AuthConfig {
        let bootstrap = match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => Some(BootstrapAdmin {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        AuthConfig {
            token_secret: self.jwt_secret.as_bytes().to_vec(),
            cookie_secure: self.production,
            cookie_same_site: SameSite::Strict,
            bootstrap,
            ..AuthConfig::default()
        }
    }

    /// Media configuration for the upload pipeline
    pub fn media_config(&self) -> MediaConfig {
        MediaConfig {
            optimize: !self.disable_optimize,
            ..MediaConfig::new(
                self.imagekit_public_key.clone(),
                self.imagekit_private_key.clone(),
                self.imagekit_url_endpoint.clone(),
            )
        }
    }
}
