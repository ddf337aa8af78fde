//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase};
use crate::domain::repository::AdminRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AdminPublic, LoginRequest, LoginResponse, MessageResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/admin/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let cookie = session_cookie_config(&state.config).build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
            admin: AdminPublic::from(&output.admin),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/admin/logout
///
/// Tokens are stateless, so logout only clears the cookie.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    tracing::info!("Admin logged out");

    let cookie = session_cookie_config(&state.config).build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.token_ttl_secs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_matches_token_window() {
        let config = AuthConfig::with_random_secret();
        let cookie = session_cookie_config(&config).build_set_cookie("tok");
        assert!(cookie.contains("admin-token=tok"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=604800")); // 7 days
    }

    #[test]
    fn test_development_cookie_not_secure() {
        let config = AuthConfig::development();
        let cookie = session_cookie_config(&config).build_set_cookie("tok");
        assert!(!cookie.contains("Secure"));
    }
}
