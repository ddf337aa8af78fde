//! Admin Entity
//!
//! The administrator account. There is exactly one credential record per
//! username; the record is provisioned lazily on first login with the
//! configured default credentials and never deleted by this system.

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use platform::password::HashedPassword;

use crate::domain::value_object::username::Username;

/// Admin entity
#[derive(Debug, Clone)]
pub struct Admin {
    /// Internal UUID identifier
    pub admin_id: AdminId,
    /// Login handle (unique)
    pub username: Username,
    /// Argon2id hash; the plaintext password is never stored
    pub password_hash: HashedPassword,
    /// Optional contact address, returned in the login response
    pub email: Option<String>,
    /// Disabled accounts are rejected at login regardless of password
    pub is_active: bool,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new active admin
    pub fn new(username: Username, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            admin_id: AdminId::new(),
            username,
            password_hash,
            email: None,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Check if the account can log in
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn hash(pw: &str) -> HashedPassword {
        ClearTextPassword::new(pw.to_string()).unwrap().hash().unwrap()
    }

    #[test]
    fn test_new_admin_is_active_without_login() {
        let admin = Admin::new(Username::new("admin").unwrap(), hash("admin123"));
        assert!(admin.is_active);
        assert!(admin.can_login());
        assert!(admin.last_login_at.is_none());
        assert!(admin.email.is_none());
    }

    #[test]
    fn test_record_login_sets_timestamps() {
        let mut admin = Admin::new(Username::new("admin").unwrap(), hash("admin123"));
        let created = admin.updated_at;
        admin.record_login();
        assert!(admin.last_login_at.is_some());
        assert!(admin.updated_at >= created);
    }

    #[test]
    fn test_disabled_admin_cannot_login() {
        let mut admin = Admin::new(Username::new("admin").unwrap(), hash("admin123"));
        admin.is_active = false;
        assert!(!admin.can_login());
    }
}
