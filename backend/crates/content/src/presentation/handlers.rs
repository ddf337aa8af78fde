//! HTTP Handlers
//!
//! The list resources share four generic handlers; the router pins the
//! concrete entity/DTO types per route. Hero and the announcement list
//! have their own handlers because their semantics deviate.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{ContentCrud, HeroService, VisibleAnnouncements};
use crate::domain::entity::announcement::Announcement;
use crate::domain::entity::{ApplyPatch, ContentEntity};
use crate::domain::repository::{ContentRepository, HeroRepository};
use crate::error::{ContentError, ContentResult};
use crate::presentation::dto::{
    AnnouncementResponse, CreateHeroRequest, HeroResponse, MessageResponse, UpdateHeroRequest,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R> {
    pub repo: Arc<R>,
}

// ============================================================================
// Generic CRUD handlers
// ============================================================================

/// GET /<resource>
pub async fn list<R, E, D>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<D>>>
where
    R: ContentRepository<E> + Clone + Send + Sync + 'static,
    E: ContentEntity,
    D: From<E> + Serialize,
{
    let items = ContentCrud::new(state.repo.clone()).list::<E>().await?;

    Ok(Json(items.into_iter().map(D::from).collect()))
}

/// POST /<resource>
pub async fn create<R, E, C, D>(
    State(state): State<ContentAppState<R>>,
    Json(req): Json<C>,
) -> ContentResult<Json<D>>
where
    R: ContentRepository<E> + Clone + Send + Sync + 'static,
    E: ContentEntity,
    C: TryInto<E, Error = ContentError> + DeserializeOwned + Send,
    D: From<E> + Serialize,
{
    let entity: E = req.try_into()?;
    let entity = ContentCrud::new(state.repo.clone()).create(entity).await?;

    Ok(Json(D::from(entity)))
}

/// PUT /<resource>/{id}
pub async fn update<R, E, P, U, D>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<U>,
) -> ContentResult<Json<D>>
where
    R: ContentRepository<E> + Clone + Send + Sync + 'static,
    E: ContentEntity + ApplyPatch<P>,
    P: Send,
    U: Into<P> + DeserializeOwned + Send,
    D: From<E> + Serialize,
{
    let entity = ContentCrud::new(state.repo.clone())
        .update::<E, P>(id, req.into())
        .await?;

    Ok(Json(D::from(entity)))
}

/// DELETE /<resource>/{id}
pub async fn delete_by_id<R, E>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<Json<MessageResponse>>
where
    R: ContentRepository<E> + Clone + Send + Sync + 'static,
    E: ContentEntity,
{
    ContentCrud::new(state.repo.clone()).delete::<E>(id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", E::RESOURCE),
    }))
}

// ============================================================================
// Hero handlers (singleton semantics)
// ============================================================================

/// GET /hero
pub async fn get_hero<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let hero = HeroService::new(state.repo.clone()).get_or_provision().await?;

    Ok(Json(HeroResponse::from(hero)))
}

/// POST /hero, replace semantics: deactivate all, create a new active section
pub async fn create_hero<R>(
    State(state): State<ContentAppState<R>>,
    Json(req): Json<CreateHeroRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let (title, subtitle, images) = req.into_parts();
    let hero = HeroService::new(state.repo.clone())
        .replace(title, subtitle, images)
        .await?;

    Ok(Json(HeroResponse::from(hero)))
}

/// PUT /hero, patch the active section in place
pub async fn update_hero<R>(
    State(state): State<ContentAppState<R>>,
    Json(req): Json<UpdateHeroRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: HeroRepository + Clone + Send + Sync + 'static,
{
    let hero = HeroService::new(state.repo.clone())
        .update_active(req.into())
        .await?;

    Ok(Json(HeroResponse::from(hero)))
}

// ============================================================================
// Announcement list (visibility filter applies)
// ============================================================================

/// GET /announcements
pub async fn list_announcements<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<AnnouncementResponse>>>
where
    R: ContentRepository<Announcement> + Clone + Send + Sync + 'static,
{
    let announcements = VisibleAnnouncements::new(state.repo.clone())
        .execute(Utc::now())
        .await?;

    Ok(Json(
        announcements
            .into_iter()
            .map(AnnouncementResponse::from)
            .collect(),
    ))
}
