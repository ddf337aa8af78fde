//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::admin::Admin;

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Fields default to empty so a missing key produces the domain-level
/// "credentials required" rejection instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Public admin fields; the password hash never leaves the service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPublic {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<&Admin> for AdminPublic {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.admin_id.into_uuid(),
            username: admin.username.original().to_string(),
            email: admin.email.clone(),
            last_login: admin.last_login_at,
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub admin: AdminPublic,
}

// ============================================================================
// Logout
// ============================================================================

/// Generic message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_missing_fields_default_to_empty() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_admin_public_wire_shape() {
        use crate::domain::value_object::username::Username;
        use platform::password::ClearTextPassword;

        let hash = ClearTextPassword::new("admin123".to_string())
            .unwrap()
            .hash()
            .unwrap();
        let admin = Admin::new(Username::new("admin").unwrap(), hash);

        let json = serde_json::to_value(AdminPublic::from(&admin)).unwrap();
        assert_eq!(json["username"], "admin");
        assert!(json.get("lastLogin").is_some());
        // Hash must not appear anywhere in the payload
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
