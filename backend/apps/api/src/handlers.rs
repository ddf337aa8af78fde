//! App-level Handlers

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

/// Which required environment keys are configured (booleans only, never
/// values) plus the deployment environment name
#[derive(Debug, Clone)]
pub struct EnvReport {
    pub imagekit_public_key: bool,
    pub imagekit_private_key: bool,
    pub imagekit_url_endpoint: bool,
    pub app_env: String,
}

/// GET /api/health
pub async fn health(State(report): State<Arc<EnvReport>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": {
            "IMAGEKIT_PUBLIC_KEY": report.imagekit_public_key,
            "IMAGEKIT_PRIVATE_KEY": report.imagekit_private_key,
            "IMAGEKIT_URL_ENDPOINT": report.imagekit_url_endpoint,
            "APP_ENV": report.app_env,
        },
    }))
}
