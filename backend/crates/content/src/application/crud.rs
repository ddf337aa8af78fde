//! Generic Content CRUD Service
//!
//! One service covers the list/create/update/delete contract for every
//! list resource; the entity type is chosen at the call site. Update is
//! read-patch-write: an unknown id is a NotFound, never an upsert.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entity::{ApplyPatch, ContentEntity};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Generic CRUD use cases over one repository
pub struct ContentCrud<R> {
    repo: Arc<R>,
}

impl<R> ContentCrud<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List active records in display order
    pub async fn list<E>(&self) -> ContentResult<Vec<E>>
    where
        R: ContentRepository<E>,
        E: ContentEntity,
    {
        self.repo.list_active().await
    }

    /// Persist a freshly constructed record
    pub async fn create<E>(&self, entity: E) -> ContentResult<E>
    where
        R: ContentRepository<E>,
        E: ContentEntity,
    {
        self.repo.insert(&entity).await?;
        tracing::info!(resource = E::RESOURCE, id = %entity.id(), "Created record");
        Ok(entity)
    }

    /// Apply a partial update to an existing record
    pub async fn update<E, P>(&self, id: Uuid, patch: P) -> ContentResult<E>
    where
        R: ContentRepository<E>,
        E: ContentEntity + ApplyPatch<P>,
        P: Send,
    {
        let mut entity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ContentError::NotFound(E::RESOURCE))?;

        entity.apply(patch)?;
        entity.touch();

        self.repo.update(&entity).await?;
        Ok(entity)
    }

    /// Hard-delete a record
    pub async fn delete<E>(&self, id: Uuid) -> ContentResult<()>
    where
        R: ContentRepository<E>,
        E: ContentEntity,
    {
        if self.repo.delete(id).await? {
            tracing::info!(resource = E::RESOURCE, id = %id, "Deleted record");
            Ok(())
        } else {
            Err(ContentError::NotFound(E::RESOURCE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::program::{Program, ProgramPatch};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository mirroring the Postgres ordering contract
    #[derive(Default)]
    struct InMemoryPrograms {
        rows: Mutex<HashMap<Uuid, Program>>,
    }

    impl ContentRepository<Program> for InMemoryPrograms {
        async fn list_active(&self) -> ContentResult<Vec<Program>> {
            let mut items: Vec<Program> = self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.is_active)
                .cloned()
                .collect();
            items.sort_by(|a, b| {
                a.sort_order
                    .cmp(&b.sort_order)
                    .then(a.created_at.cmp(&b.created_at))
            });
            Ok(items)
        }

        async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<Program>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, entity: &Program) -> ContentResult<()> {
            self.rows.lock().unwrap().insert(entity.id(), entity.clone());
            Ok(())
        }

        async fn update(&self, entity: &Program) -> ContentResult<()> {
            self.rows.lock().unwrap().insert(entity.id(), entity.clone());
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> ContentResult<bool> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    fn program(name: &str, order: Option<i32>) -> Program {
        Program::new(
            name.to_string(),
            "desc".to_string(),
            "https://cdn.example.com/p.jpg".to_string(),
            None,
            None,
            order,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo);

        let created = crud.create(program("Folk Dance", None)).await.unwrap();
        assert_eq!(created.sort_order, 0);

        let listed: Vec<Program> = crud.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Folk Dance");
    }

    #[tokio::test]
    async fn test_list_orders_by_sort_then_creation() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo);

        // Insert out of order; tie on sort_order broken by creation time
        let second = crud.create(program("Second", Some(1))).await.unwrap();
        let third = crud.create(program("Third", Some(1))).await.unwrap();
        let first = crud.create(program("First", Some(0))).await.unwrap();

        let listed: Vec<Program> = crud.list().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert!(second.created_at <= third.created_at);
        assert_eq!(listed[0].id(), first.id());
    }

    #[tokio::test]
    async fn test_list_excludes_soft_deleted() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo.clone());

        let kept = crud.create(program("Kept", None)).await.unwrap();
        let hidden = crud.create(program("Hidden", None)).await.unwrap();

        crud.update::<Program, _>(
            hidden.id(),
            ProgramPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let listed: Vec<Program> = crud.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), kept.id());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_creates_nothing() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo.clone());

        let err = crud
            .update::<Program, _>(
                Uuid::new_v4(),
                ProgramPatch {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound("Program")));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_bumps_updated_at() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo);

        let created = crud.create(program("Folk Dance", None)).await.unwrap();
        let updated = crud
            .update::<Program, _>(
                created.id(),
                ProgramPatch {
                    name: Some("Folk Dance Finale".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Folk Dance Finale");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo);

        let err = crud.delete::<Program>(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound("Program")));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = Arc::new(InMemoryPrograms::default());
        let crud = ContentCrud::new(repo);

        let created = crud.create(program("Folk Dance", None)).await.unwrap();
        crud.delete::<Program>(created.id()).await.unwrap();

        let listed: Vec<Program> = crud.list().await.unwrap();
        assert!(listed.is_empty());
    }
}
