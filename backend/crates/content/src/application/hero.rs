//! Hero Section Service
//!
//! The hero is a singleton: reads lazily provision a default-content
//! section, `replace` swaps in a fresh section, `update_active` patches
//! the current one in place. Both mutation paths end with exactly one
//! active section.
//!
//! The deactivate-then-insert window is not transactional; two concurrent
//! replacements can briefly expose zero or two active sections to a
//! reader. Accepted for this domain's consistency needs.

use std::sync::Arc;

use crate::domain::entity::hero::{HeroImage, HeroPatch, HeroSection};
use crate::domain::entity::{ApplyPatch, ContentEntity};
use crate::domain::repository::HeroRepository;
use crate::error::ContentResult;

/// Hero section use cases
pub struct HeroService<R>
where
    R: HeroRepository,
{
    repo: Arc<R>,
}

impl<R> HeroService<R>
where
    R: HeroRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The active section, provisioning the default when none exists
    pub async fn get_or_provision(&self) -> ContentResult<HeroSection> {
        match self.repo.find_active().await? {
            Some(hero) => Ok(hero),
            None => self.provision_default().await,
        }
    }

    /// Explicit provisioning step for the empty-store case
    async fn provision_default(&self) -> ContentResult<HeroSection> {
        let hero = HeroSection::default_content();
        self.repo.insert(&hero).await?;

        tracing::info!(hero_id = %hero.id(), "Provisioned default hero section");
        Ok(hero)
    }

    /// Replace semantics: deactivate everything, insert a new active section
    pub async fn replace(
        &self,
        title: String,
        subtitle: String,
        images: Vec<HeroImage>,
    ) -> ContentResult<HeroSection> {
        let hero = HeroSection::new(title, subtitle, images)?;

        let deactivated = self.repo.deactivate_all().await?;
        self.repo.insert(&hero).await?;

        tracing::info!(
            hero_id = %hero.id(),
            deactivated = deactivated,
            "Replaced hero section"
        );
        Ok(hero)
    }

    /// Patch the active section in place, provisioning first if none exists
    pub async fn update_active(&self, patch: HeroPatch) -> ContentResult<HeroSection> {
        let mut hero = match self.repo.find_active().await? {
            Some(hero) => hero,
            None => self.provision_default().await?,
        };

        hero.apply(patch)?;
        hero.is_active = true;
        hero.touch();

        self.repo.update(&hero).await?;
        Ok(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct InMemoryHeroes {
        rows: Mutex<HashMap<Uuid, HeroSection>>,
    }

    impl InMemoryHeroes {
        fn active_count(&self) -> usize {
            self.rows
                .lock()
                .unwrap()
                .values()
                .filter(|h| h.is_active)
                .count()
        }

        fn total_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl HeroRepository for InMemoryHeroes {
        async fn find_active(&self) -> ContentResult<Option<HeroSection>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|h| h.is_active)
                .cloned())
        }

        async fn deactivate_all(&self) -> ContentResult<u64> {
            let mut rows = self.rows.lock().unwrap();
            let mut touched = 0;
            for hero in rows.values_mut() {
                if hero.is_active {
                    hero.is_active = false;
                    touched += 1;
                }
            }
            Ok(touched)
        }

        async fn insert(&self, hero: &HeroSection) -> ContentResult<()> {
            self.rows.lock().unwrap().insert(hero.id(), hero.clone());
            Ok(())
        }

        async fn update(&self, hero: &HeroSection) -> ContentResult<()> {
            self.rows.lock().unwrap().insert(hero.id(), hero.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_get_provisions_default_once() {
        let repo = Arc::new(InMemoryHeroes::default());
        let service = HeroService::new(repo.clone());

        let first = service.get_or_provision().await.unwrap();
        assert_eq!(first.title, "ETHNOSPARK 2025");
        assert_eq!(repo.total_count(), 1);

        // Second read returns the stored section without another insert
        let second = service.get_or_provision().await.unwrap();
        assert_eq!(second.id(), first.id());
        assert_eq!(repo.total_count(), 1);
    }

    #[tokio::test]
    async fn test_replace_leaves_one_active() {
        let repo = Arc::new(InMemoryHeroes::default());
        let service = HeroService::new(repo.clone());

        service.get_or_provision().await.unwrap();
        let replaced = service
            .replace(
                "ETHNOSPARK 2026".to_string(),
                "Next year's edition".to_string(),
                vec![],
            )
            .await
            .unwrap();

        assert_eq!(repo.active_count(), 1);
        assert_eq!(repo.total_count(), 2);

        let active = service.get_or_provision().await.unwrap();
        assert_eq!(active.id(), replaced.id());
    }

    #[tokio::test]
    async fn test_update_active_patches_in_place() {
        let repo = Arc::new(InMemoryHeroes::default());
        let service = HeroService::new(repo.clone());

        let original = service.get_or_provision().await.unwrap();
        let updated = service
            .update_active(HeroPatch {
                title: Some("New Title".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.title, "New Title");
        // Unpatched fields survive
        assert_eq!(updated.subtitle, original.subtitle);
        assert_eq!(repo.active_count(), 1);
        assert_eq!(repo.total_count(), 1);
    }

    #[tokio::test]
    async fn test_update_active_provisions_on_empty_store() {
        let repo = Arc::new(InMemoryHeroes::default());
        let service = HeroService::new(repo.clone());

        let updated = service
            .update_active(HeroPatch {
                title: Some("New Title".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "New Title");
        // Default subtitle from provisioning survives the patch
        assert!(updated.subtitle.contains("Ethnic Day"));
        assert_eq!(repo.active_count(), 1);
    }

    #[tokio::test]
    async fn test_replace_validates_fields() {
        let repo = Arc::new(InMemoryHeroes::default());
        let service = HeroService::new(repo.clone());

        let result = service
            .replace("".to_string(), "subtitle".to_string(), vec![])
            .await;
        assert!(result.is_err());
        // Validation happens before any deactivation
        assert_eq!(repo.total_count(), 0);
    }
}
