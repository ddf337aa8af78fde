//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::admin::Admin;
use crate::domain::value_object::username::Username;
use crate::error::AuthResult;

/// Admin repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Find admin by username (canonical form)
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Admin>>;

    /// Insert a new admin
    ///
    /// The store enforces username uniqueness; a concurrent duplicate insert
    /// surfaces as a unique-violation database error, not a crash.
    async fn insert(&self, admin: &Admin) -> AuthResult<()>;

    /// Update an existing admin
    async fn update(&self, admin: &Admin) -> AuthResult<()>;
}
