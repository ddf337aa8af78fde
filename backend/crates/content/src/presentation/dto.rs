//! API DTOs (Data Transfer Objects)
//!
//! Create requests deserialize every field optionally so a missing key
//! surfaces as a 400 validation error from the domain constructors, not a
//! deserialization failure. Update requests convert to domain patches;
//! absent keys leave fields unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::entity::announcement::{Announcement, AnnouncementPatch};
use crate::domain::entity::gallery::{GalleryImage, GalleryImagePatch};
use crate::domain::entity::hero::{self, HeroImage, HeroPatch, HeroSection};
use crate::domain::entity::program::{Program, ProgramPatch};
use crate::domain::entity::schedule::{ScheduleEntry, ScheduleEntryPatch};
use crate::domain::entity::team::{TeamMember, TeamMemberPatch};
use crate::domain::entity::ContentEntity;
use crate::error::ContentError;

/// Generic message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

/// Distinguish "key absent" from "key set to null" for clearable fields
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ============================================================================
// Hero Section
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<HeroImage>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HeroSection> for HeroResponse {
    fn from(hero: HeroSection) -> Self {
        Self {
            id: hero.id(),
            title: hero.title,
            subtitle: hero.subtitle,
            images: hero.images,
            is_active: hero.is_active,
            created_at: hero.created_at,
            updated_at: hero.updated_at,
        }
    }
}

/// Replace request (POST /hero); missing fields fall back to the defaults,
/// matching the schema-level defaults upstream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub images: Option<Vec<HeroImage>>,
}

impl CreateHeroRequest {
    pub fn into_parts(self) -> (String, String, Vec<HeroImage>) {
        (
            self.title
                .unwrap_or_else(|| hero::DEFAULT_TITLE.to_string()),
            self.subtitle
                .unwrap_or_else(|| hero::DEFAULT_SUBTITLE.to_string()),
            self.images.unwrap_or_default(),
        )
    }
}

/// Update request (PUT /hero)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHeroRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub images: Option<Vec<HeroImage>>,
}

impl From<UpdateHeroRequest> for HeroPatch {
    fn from(req: UpdateHeroRequest) -> Self {
        Self {
            title: req.title,
            subtitle: req.subtitle,
            images: req.images,
        }
    }
}

// ============================================================================
// Programs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Program> for ProgramResponse {
    fn from(p: Program) -> Self {
        Self {
            id: p.id(),
            name: p.name,
            description: p.description,
            image: p.image,
            time: p.time,
            location: p.location,
            is_active: p.is_active,
            order: p.sort_order,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub order: Option<i32>,
}

impl TryFrom<CreateProgramRequest> for Program {
    type Error = ContentError;

    fn try_from(req: CreateProgramRequest) -> Result<Self, Self::Error> {
        Program::new(
            req.name.unwrap_or_default(),
            req.description.unwrap_or_default(),
            req.image.unwrap_or_default(),
            req.time,
            req.location,
            req.order,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl From<UpdateProgramRequest> for ProgramPatch {
    fn from(req: UpdateProgramRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            time: req.time,
            location: req.location,
            is_active: req.is_active,
            sort_order: req.order,
        }
    }
}

// ============================================================================
// Schedule Entries
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ScheduleEntry> for ScheduleResponse {
    fn from(e: ScheduleEntry) -> Self {
        Self {
            id: e.id(),
            time: e.time,
            title: e.title,
            description: e.description,
            location: e.location,
            is_active: e.is_active,
            order: e.sort_order,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub order: Option<i32>,
}

impl TryFrom<CreateScheduleRequest> for ScheduleEntry {
    type Error = ContentError;

    fn try_from(req: CreateScheduleRequest) -> Result<Self, Self::Error> {
        ScheduleEntry::new(
            req.time.unwrap_or_default(),
            req.title.unwrap_or_default(),
            req.description.unwrap_or_default(),
            req.location,
            req.order,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl From<UpdateScheduleRequest> for ScheduleEntryPatch {
    fn from(req: UpdateScheduleRequest) -> Self {
        Self {
            time: req.time,
            title: req.title,
            description: req.description,
            location: req.location,
            is_active: req.is_active,
            sort_order: req.order,
        }
    }
}

// ============================================================================
// Gallery Images
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub id: Uuid,
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryImage> for GalleryResponse {
    fn from(g: GalleryImage) -> Self {
        Self {
            id: g.id(),
            url: g.url,
            alt: g.alt,
            caption: g.caption,
            is_active: g.is_active,
            order: g.sort_order,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryRequest {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub order: Option<i32>,
}

impl TryFrom<CreateGalleryRequest> for GalleryImage {
    type Error = ContentError;

    fn try_from(req: CreateGalleryRequest) -> Result<Self, Self::Error> {
        GalleryImage::new(
            req.url.unwrap_or_default(),
            req.alt.unwrap_or_default(),
            req.caption,
            req.order,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryRequest {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl From<UpdateGalleryRequest> for GalleryImagePatch {
    fn from(req: UpdateGalleryRequest) -> Self {
        Self {
            url: req.url,
            alt: req.alt,
            caption: req.caption,
            is_active: req.is_active,
            sort_order: req.order,
        }
    }
}

// ============================================================================
// Team Members
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamResponse {
    fn from(m: TeamMember) -> Self {
        Self {
            id: m.id(),
            name: m.name,
            role: m.role,
            image: m.image,
            bio: m.bio,
            is_active: m.is_active,
            order: m.sort_order,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub order: Option<i32>,
}

impl TryFrom<CreateTeamRequest> for TeamMember {
    type Error = ContentError;

    fn try_from(req: CreateTeamRequest) -> Result<Self, Self::Error> {
        TeamMember::new(
            req.name.unwrap_or_default(),
            req.role.unwrap_or_default(),
            req.image.unwrap_or_default(),
            req.bio,
            req.order,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl From<UpdateTeamRequest> for TeamMemberPatch {
    fn from(req: UpdateTeamRequest) -> Self {
        Self {
            name: req.name,
            role: req.role,
            image: req.image,
            bio: req.bio,
            is_active: req.is_active,
            sort_order: req.order,
        }
    }
}

// ============================================================================
// Announcements
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub id: Uuid,
    pub text: String,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(a: Announcement) -> Self {
        Self {
            id: a.id(),
            text: a.text,
            is_active: a.is_active,
            start_date: a.start_date,
            end_date: a.end_date,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub text: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<CreateAnnouncementRequest> for Announcement {
    type Error = ContentError;

    fn try_from(req: CreateAnnouncementRequest) -> Result<Self, Self::Error> {
        Announcement::new(req.text.unwrap_or_default(), req.start_date, req.end_date)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    pub text: Option<String>,
    pub is_active: Option<bool>,
    /// Absent key leaves the bound; explicit null clears it
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateAnnouncementRequest> for AnnouncementPatch {
    fn from(req: UpdateAnnouncementRequest) -> Self {
        Self {
            text: req.text,
            is_active: req.is_active,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
