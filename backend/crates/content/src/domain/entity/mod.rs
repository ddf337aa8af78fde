//! Entity Module
//!
//! One module per content resource. All list resources share the same
//! contract: an `is_active` soft-delete flag and a `sort_order` display
//! key (announcements order by creation time instead).

pub mod announcement;
pub mod gallery;
pub mod hero;
pub mod program;
pub mod schedule;
pub mod team;

pub use announcement::{Announcement, AnnouncementPatch};
pub use gallery::{GalleryImage, GalleryImagePatch};
pub use hero::{HeroImage, HeroPatch, HeroSection};
pub use program::{Program, ProgramPatch};
pub use schedule::{ScheduleEntry, ScheduleEntryPatch};
pub use team::{TeamMember, TeamMemberPatch};

use uuid::Uuid;

use crate::error::{ContentError, ContentResult};

/// Common surface the generic CRUD machinery needs from every resource
pub trait ContentEntity: Send + Sync + 'static {
    /// Human-readable resource name used in messages ("Program")
    const RESOURCE: &'static str;

    /// Record identifier
    fn id(&self) -> Uuid;

    /// Bump `updated_at`
    fn touch(&mut self);
}

/// Partial-update application with field validation
pub trait ApplyPatch<P>: Sized {
    fn apply(&mut self, patch: P) -> ContentResult<()>;
}

/// Validate a required text field (non-empty after trim)
pub(crate) fn non_empty(field: &'static str, value: String) -> ContentResult<String> {
    if value.trim().is_empty() {
        Err(ContentError::missing_field(field))
    } else {
        Ok(value)
    }
}

/// Normalize an optional text field; blank collapses to None
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        if v.trim().is_empty() { None } else { Some(v) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(non_empty("name", "Dance".to_string()).is_ok());
        assert!(non_empty("name", "".to_string()).is_err());
        assert!(non_empty("name", "   ".to_string()).is_err());
    }

    #[test]
    fn test_optional_collapses_blank() {
        assert_eq!(optional(Some("Main Hall".to_string())), Some("Main Hall".to_string()));
        assert_eq!(optional(Some("".to_string())), None);
        assert_eq!(optional(Some("  ".to_string())), None);
        assert_eq!(optional(None), None);
    }
}
