//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed admin repository
///
/// The `admins` table carries a unique index on `username_canonical`;
/// concurrent bootstrap inserts surface as unique violations.
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminRepository for PgAdminRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT
                admin_id,
                username,
                username_canonical,
                password_hash,
                email,
                is_active,
                last_login_at,
                created_at,
                updated_at
            FROM admins
            WHERE username_canonical = $1
            "#,
        )
        .bind(username.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_admin()).transpose()
    }

    async fn insert(&self, admin: &Admin) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (
                admin_id,
                username,
                username_canonical,
                password_hash,
                email,
                is_active,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(admin.admin_id.as_uuid())
        .bind(admin.username.original())
        .bind(admin.username.canonical())
        .bind(admin.password_hash.as_phc_string())
        .bind(&admin.email)
        .bind(admin.is_active)
        .bind(admin.last_login_at)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, admin: &Admin) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE admins SET
                password_hash = $2,
                email = $3,
                is_active = $4,
                last_login_at = $5,
                updated_at = $6
            WHERE admin_id = $1
            "#,
        )
        .bind(admin.admin_id.as_uuid())
        .bind(admin.password_hash.as_phc_string())
        .bind(&admin.email)
        .bind(admin.is_active)
        .bind(admin.last_login_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    admin_id: Uuid,
    username: String,
    #[allow(dead_code)]
    username_canonical: String,
    password_hash: String,
    email: Option<String>,
    is_active: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> AuthResult<Admin> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {e}")))?;

        Ok(Admin {
            admin_id: AdminId::from_uuid(self.admin_id),
            username: Username::from_db(&self.username),
            password_hash,
            email: self.email,
            is_active: self.is_active,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
