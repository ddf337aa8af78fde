//! Application Layer
//!
//! Use cases and application services.

pub mod announcements;
pub mod crud;
pub mod hero;

// Re-exports
pub use announcements::VisibleAnnouncements;
pub use crud::ContentCrud;
pub use hero::HeroService;
