//! Presentation Layer
//!
//! Multipart handler, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MediaAppState;
pub use router::{media_router, media_router_generic};
