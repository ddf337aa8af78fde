//! Content Routers
//!
//! Two routers over the same state: the public one carries the read
//! endpoints, the admin one the mutating endpoints. The caller merges
//! them and wraps the admin half in the token-verifying middleware.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::entity::announcement::{Announcement, AnnouncementPatch};
use crate::domain::entity::gallery::{GalleryImage, GalleryImagePatch};
use crate::domain::entity::program::{Program, ProgramPatch};
use crate::domain::entity::schedule::{ScheduleEntry, ScheduleEntryPatch};
use crate::domain::entity::team::{TeamMember, TeamMemberPatch};
use crate::infra::postgres::PgContentRepository;
use crate::presentation::dto::{
    AnnouncementResponse, CreateAnnouncementRequest, CreateGalleryRequest, CreateProgramRequest,
    CreateScheduleRequest, CreateTeamRequest, GalleryResponse, ProgramResponse, ScheduleResponse,
    TeamResponse, UpdateAnnouncementRequest, UpdateGalleryRequest, UpdateProgramRequest,
    UpdateScheduleRequest, UpdateTeamRequest,
};
use crate::presentation::handlers::{self, ContentAppState};

type Repo = PgContentRepository;

/// Read endpoints, open to the public site
pub fn public_content_router(repo: PgContentRepository) -> Router {
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/hero", get(handlers::get_hero::<Repo>))
        .route(
            "/programs",
            get(handlers::list::<Repo, Program, ProgramResponse>),
        )
        .route(
            "/schedules",
            get(handlers::list::<Repo, ScheduleEntry, ScheduleResponse>),
        )
        .route(
            "/gallery",
            get(handlers::list::<Repo, GalleryImage, GalleryResponse>),
        )
        .route(
            "/team",
            get(handlers::list::<Repo, TeamMember, TeamResponse>),
        )
        .route(
            "/announcements",
            get(handlers::list_announcements::<Repo>),
        )
        .with_state(state)
}

/// Mutating endpoints, to be wrapped in the admin token middleware
pub fn admin_content_router(repo: PgContentRepository) -> Router {
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/hero", post(handlers::create_hero::<Repo>))
        .route("/hero", put(handlers::update_hero::<Repo>))
        .route(
            "/programs",
            post(handlers::create::<Repo, Program, CreateProgramRequest, ProgramResponse>),
        )
        .route(
            "/programs/{id}",
            put(handlers::update::<Repo, Program, ProgramPatch, UpdateProgramRequest, ProgramResponse>),
        )
        .route(
            "/programs/{id}",
            delete(handlers::delete_by_id::<Repo, Program>),
        )
        .route(
            "/schedules",
            post(handlers::create::<Repo, ScheduleEntry, CreateScheduleRequest, ScheduleResponse>),
        )
        .route(
            "/schedules/{id}",
            put(handlers::update::<Repo, ScheduleEntry, ScheduleEntryPatch, UpdateScheduleRequest, ScheduleResponse>),
        )
        .route(
            "/schedules/{id}",
            delete(handlers::delete_by_id::<Repo, ScheduleEntry>),
        )
        .route(
            "/gallery",
            post(handlers::create::<Repo, GalleryImage, CreateGalleryRequest, GalleryResponse>),
        )
        .route(
            "/gallery/{id}",
            put(handlers::update::<Repo, GalleryImage, GalleryImagePatch, UpdateGalleryRequest, GalleryResponse>),
        )
        .route(
            "/gallery/{id}",
            delete(handlers::delete_by_id::<Repo, GalleryImage>),
        )
        .route(
            "/team",
            post(handlers::create::<Repo, TeamMember, CreateTeamRequest, TeamResponse>),
        )
        .route(
            "/team/{id}",
            put(handlers::update::<Repo, TeamMember, TeamMemberPatch, UpdateTeamRequest, TeamResponse>),
        )
        .route(
            "/team/{id}",
            delete(handlers::delete_by_id::<Repo, TeamMember>),
        )
        .route(
            "/announcements",
            post(
                handlers::create::<
                    Repo,
                    Announcement,
                    CreateAnnouncementRequest,
                    AnnouncementResponse,
                >,
            ),
        )
        .route(
            "/announcements/{id}",
            put(
                handlers::update::<
                    Repo,
                    Announcement,
                    AnnouncementPatch,
                    UpdateAnnouncementRequest,
                    AnnouncementResponse,
                >,
            ),
        )
        .route(
            "/announcements/{id}",
            delete(handlers::delete_by_id::<Repo, Announcement>),
        )
        .with_state(state)
}
