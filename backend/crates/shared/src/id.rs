//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProgramId = Id<markers::Program>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse from string form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self::from_uuid(s.parse()?))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derived Clone/Copy would require T: Clone
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Admin IDs
    pub struct Admin;

    /// Marker for HeroSection IDs
    pub struct HeroSection;

    /// Marker for Program IDs
    pub struct Program;

    /// Marker for ScheduleEntry IDs
    pub struct ScheduleEntry;

    /// Marker for GalleryImage IDs
    pub struct GalleryImage;

    /// Marker for TeamMember IDs
    pub struct TeamMember;

    /// Marker for Announcement IDs
    pub struct Announcement;
}

/// Type aliases for common IDs
pub type AdminId = Id<markers::Admin>;
pub type HeroSectionId = Id<markers::HeroSection>;
pub type ProgramId = Id<markers::Program>;
pub type ScheduleEntryId = Id<markers::ScheduleEntry>;
pub type GalleryImageId = Id<markers::GalleryImage>;
pub type TeamMemberId = Id<markers::TeamMember>;
pub type AnnouncementId = Id<markers::Announcement>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let admin_id: AdminId = Id::new();
        let program_id: ProgramId = Id::new();

        // These are different types, cannot be mixed
        let _a: Uuid = admin_id.into_uuid();
        let _p: Uuid = program_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: ProgramId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let id: AnnouncementId = Id::new();
        let parsed = Id::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_parse_invalid() {
        let result: Result<ProgramId, _> = Id::parse("not-a-uuid");
        assert!(result.is_err());
    }
}
