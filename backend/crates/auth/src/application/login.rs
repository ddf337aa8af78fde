//! Login Use Case
//!
//! Authenticates the administrator and issues a signed token.
//!
//! Flow: input check → lookup → (bootstrap | found) → active check →
//! password verify → record login → issue token. Every rejection path
//! maps onto the same "Invalid credentials" message except the missing-
//! input and disabled-account cases.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed token for the session cookie
    pub token: String,
    /// The authenticated admin (post last-login update)
    pub admin: Admin,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: TokenIssuer,
}

impl<R> LoginUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenIssuer::from_config(&config);
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::CredentialsRequired);
        }

        // A username our value object rejects cannot name a stored admin
        let username =
            Username::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let admin = match self.repo.find_by_username(&username).await? {
            Some(admin) => admin,
            None => self.provision_default_admin(&username).await?,
        };

        if !admin.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !admin.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Record last login; if token issuance failed after this point the
        // updated timestamp would stay - accepted, not compensated
        let mut admin = admin;
        admin.record_login();
        self.repo.update(&admin).await?;

        let token = self
            .tokens
            .sign(admin.admin_id.into_uuid(), admin.username.original());

        tracing::info!(username = %admin.username, "Admin logged in");

        Ok(LoginOutput { token, admin })
    }

    /// Provision the default admin on first login
    ///
    /// Only runs when the lookup found nothing. The submitted username must
    /// match the configured default; any other outcome is the same
    /// "Invalid credentials" as a wrong password, so this path does not
    /// reveal which usernames exist.
    async fn provision_default_admin(&self, username: &Username) -> AuthResult<Admin> {
        let bootstrap = self
            .config
            .bootstrap
            .as_ref()
            .ok_or(AuthError::InvalidCredentials)?;

        let default_username =
            Username::new(&bootstrap.username).map_err(|_| AuthError::InvalidCredentials)?;

        if username.canonical() != default_username.canonical() {
            return Err(AuthError::InvalidCredentials);
        }

        let password_hash = ClearTextPassword::new(bootstrap.password.clone())
            .map_err(|e| AuthError::Internal(format!("Bootstrap password rejected: {e}")))?
            .hash()
            .map_err(|e| AuthError::Internal(format!("Bootstrap password hashing failed: {e}")))?;

        let admin = Admin::new(default_username, password_hash);

        match self.repo.insert(&admin).await {
            Ok(()) => {
                tracing::info!(username = %admin.username, "Provisioned default admin");
                Ok(admin)
            }
            // Concurrent first login won the insert; their row is authoritative
            Err(e) if e.is_unique_violation() => self
                .repo
                .find_by_username(username)
                .await?
                .ok_or_else(|| {
                    AuthError::Internal("Admin vanished after duplicate insert".to_string())
                }),
            Err(e) => Err(e),
        }
    }
}
