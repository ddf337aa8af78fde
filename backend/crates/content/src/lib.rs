//! Content Backend Module
//!
//! CRUD resources for the public site sections, managed from the admin
//! panel:
//!
//! - Hero section (single active record, lazily provisioned)
//! - Programs, schedule entries, gallery images, team members (ordered
//!   lists with an `isActive` soft-delete flag)
//! - Announcements (visibility window computed at read time)
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, patches, repository traits
//! - `application/` - Generic CRUD service plus hero/announcement services
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - HTTP handlers, DTOs, routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::{admin_content_router, public_content_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
