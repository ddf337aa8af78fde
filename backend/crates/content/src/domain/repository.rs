//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! All list resources share one generic [`ContentRepository`] shape instead
//! of six hand-copied traits; the hero singleton has its own contract.

use uuid::Uuid;

use crate::domain::entity::hero::HeroSection;
use crate::error::ContentResult;

/// Generic repository over one content resource
///
/// Listing returns active records only, already in display order
/// (`sort_order ASC, created_at ASC`; announcements `created_at DESC`).
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository<E>
where
    E: Send + Sync + 'static,
{
    /// All records with `is_active = true`, in display order
    async fn list_active(&self) -> ContentResult<Vec<E>>;

    /// Find one record by id, active or not
    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<E>>;

    /// Insert a new record
    async fn insert(&self, entity: &E) -> ContentResult<()>;

    /// Persist the full current state of a record
    async fn update(&self, entity: &E) -> ContentResult<()>;

    /// Hard delete; returns false when the id resolves to nothing
    async fn delete(&self, id: Uuid) -> ContentResult<bool>;
}

/// Hero section repository
///
/// The hero deviates from the generic contract: it is a singleton keyed by
/// `is_active`, replaced rather than listed.
#[trait_variant::make(HeroRepository: Send)]
pub trait LocalHeroRepository {
    /// The currently active section, if any
    async fn find_active(&self) -> ContentResult<Option<HeroSection>>;

    /// Deactivate every active section; returns how many were touched
    async fn deactivate_all(&self) -> ContentResult<u64>;

    /// Insert a new section
    async fn insert(&self, hero: &HeroSection) -> ContentResult<()>;

    /// Persist the full current state of a section
    async fn update(&self, hero: &HeroSection) -> ContentResult<()>;
}
