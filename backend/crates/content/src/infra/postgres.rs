//! PostgreSQL Repository Implementations
//!
//! One `PgContentRepository` implements the generic [`ContentRepository`]
//! contract for every list resource plus the hero singleton contract.
//! SQL stays per-table; everything above this layer is shared.

use chrono::{DateTime, Utc};
use kernel::id::{
    AnnouncementId, GalleryImageId, HeroSectionId, ProgramId, ScheduleEntryId, TeamMemberId,
};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::announcement::Announcement;
use crate::domain::entity::gallery::GalleryImage;
use crate::domain::entity::hero::{HeroImage, HeroSection};
use crate::domain::entity::program::Program;
use crate::domain::entity::schedule::ScheduleEntry;
use crate::domain::entity::team::TeamMember;
use crate::domain::repository::{ContentRepository, HeroRepository};
use crate::error::ContentResult;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Hero Repository Implementation
// ============================================================================

impl HeroRepository for PgContentRepository {
    async fn find_active(&self) -> ContentResult<Option<HeroSection>> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT hero_id, title, subtitle, images, is_active, created_at, updated_at
            FROM hero_sections
            WHERE is_active
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HeroRow::into_hero))
    }

    async fn deactivate_all(&self) -> ContentResult<u64> {
        let touched = sqlx::query("UPDATE hero_sections SET is_active = FALSE WHERE is_active")
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(touched)
    }

    async fn insert(&self, hero: &HeroSection) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO hero_sections (
                hero_id, title, subtitle, images, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(hero.hero_id.as_uuid())
        .bind(&hero.title)
        .bind(&hero.subtitle)
        .bind(Json(&hero.images))
        .bind(hero.is_active)
        .bind(hero.created_at)
        .bind(hero.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, hero: &HeroSection) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE hero_sections SET
                title = $2,
                subtitle = $3,
                images = $4,
                is_active = $5,
                updated_at = $6
            WHERE hero_id = $1
            "#,
        )
        .bind(hero.hero_id.as_uuid())
        .bind(&hero.title)
        .bind(&hero.subtitle)
        .bind(Json(&hero.images))
        .bind(hero.is_active)
        .bind(hero.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Program Repository Implementation
// ============================================================================

impl ContentRepository<Program> for PgContentRepository {
    async fn list_active(&self) -> ContentResult<Vec<Program>> {
        let rows = sqlx::query_as::<_, ProgramRow>(
            r#"
            SELECT program_id, name, description, image, time, location,
                   is_active, sort_order, created_at, updated_at
            FROM programs
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProgramRow::into_program).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<Program>> {
        let row = sqlx::query_as::<_, ProgramRow>(
            r#"
            SELECT program_id, name, description, image, time, location,
                   is_active, sort_order, created_at, updated_at
            FROM programs
            WHERE program_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProgramRow::into_program))
    }

    async fn insert(&self, program: &Program) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO programs (
                program_id, name, description, image, time, location,
                is_active, sort_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(program.program_id.as_uuid())
        .bind(&program.name)
        .bind(&program.description)
        .bind(&program.image)
        .bind(&program.time)
        .bind(&program.location)
        .bind(program.is_active)
        .bind(program.sort_order)
        .bind(program.created_at)
        .bind(program.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, program: &Program) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE programs SET
                name = $2,
                description = $3,
                image = $4,
                time = $5,
                location = $6,
                is_active = $7,
                sort_order = $8,
                updated_at = $9
            WHERE program_id = $1
            "#,
        )
        .bind(program.program_id.as_uuid())
        .bind(&program.name)
        .bind(&program.description)
        .bind(&program.image)
        .bind(&program.time)
        .bind(&program.location)
        .bind(program.is_active)
        .bind(program.sort_order)
        .bind(program.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM programs WHERE program_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Schedule Entry Repository Implementation
// ============================================================================

impl ContentRepository<ScheduleEntry> for PgContentRepository {
    async fn list_active(&self) -> ContentResult<Vec<ScheduleEntry>> {
        let rows = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT entry_id, time, title, description, location,
                   is_active, sort_order, created_at, updated_at
            FROM schedule_entries
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScheduleRow::into_entry).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<ScheduleEntry>> {
        let row = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT entry_id, time, title, description, location,
                   is_active, sort_order, created_at, updated_at
            FROM schedule_entries
            WHERE entry_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ScheduleRow::into_entry))
    }

    async fn insert(&self, entry: &ScheduleEntry) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO schedule_entries (
                entry_id, time, title, description, location,
                is_active, sort_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(entry.entry_id.as_uuid())
        .bind(&entry.time)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.location)
        .bind(entry.is_active)
        .bind(entry.sort_order)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, entry: &ScheduleEntry) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE schedule_entries SET
                time = $2,
                title = $3,
                description = $4,
                location = $5,
                is_active = $6,
                sort_order = $7,
                updated_at = $8
            WHERE entry_id = $1
            "#,
        )
        .bind(entry.entry_id.as_uuid())
        .bind(&entry.time)
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.location)
        .bind(entry.is_active)
        .bind(entry.sort_order)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM schedule_entries WHERE entry_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Gallery Image Repository Implementation
// ============================================================================

impl ContentRepository<GalleryImage> for PgContentRepository {
    async fn list_active(&self) -> ContentResult<Vec<GalleryImage>> {
        let rows = sqlx::query_as::<_, GalleryRow>(
            r#"
            SELECT image_id, url, alt, caption,
                   is_active, sort_order, created_at, updated_at
            FROM gallery_images
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GalleryRow::into_image).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<GalleryImage>> {
        let row = sqlx::query_as::<_, GalleryRow>(
            r#"
            SELECT image_id, url, alt, caption,
                   is_active, sort_order, created_at, updated_at
            FROM gallery_images
            WHERE image_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GalleryRow::into_image))
    }

    async fn insert(&self, image: &GalleryImage) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gallery_images (
                image_id, url, alt, caption,
                is_active, sort_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(image.image_id.as_uuid())
        .bind(&image.url)
        .bind(&image.alt)
        .bind(&image.caption)
        .bind(image.is_active)
        .bind(image.sort_order)
        .bind(image.created_at)
        .bind(image.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, image: &GalleryImage) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE gallery_images SET
                url = $2,
                alt = $3,
                caption = $4,
                is_active = $5,
                sort_order = $6,
                updated_at = $7
            WHERE image_id = $1
            "#,
        )
        .bind(image.image_id.as_uuid())
        .bind(&image.url)
        .bind(&image.alt)
        .bind(&image.caption)
        .bind(image.is_active)
        .bind(image.sort_order)
        .bind(image.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM gallery_images WHERE image_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Team Member Repository Implementation
// ============================================================================

impl ContentRepository<TeamMember> for PgContentRepository {
    async fn list_active(&self) -> ContentResult<Vec<TeamMember>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT member_id, name, role, image, bio,
                   is_active, sort_order, created_at, updated_at
            FROM team_members
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TeamRow::into_member).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<TeamMember>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT member_id, name, role, image, bio,
                   is_active, sort_order, created_at, updated_at
            FROM team_members
            WHERE member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TeamRow::into_member))
    }

    async fn insert(&self, member: &TeamMember) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (
                member_id, name, role, image, bio,
                is_active, sort_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(member.member_id.as_uuid())
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.image)
        .bind(&member.bio)
        .bind(member.is_active)
        .bind(member.sort_order)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, member: &TeamMember) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE team_members SET
                name = $2,
                role = $3,
                image = $4,
                bio = $5,
                is_active = $6,
                sort_order = $7,
                updated_at = $8
            WHERE member_id = $1
            "#,
        )
        .bind(member.member_id.as_uuid())
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.image)
        .bind(&member.bio)
        .bind(member.is_active)
        .bind(member.sort_order)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM team_members WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Announcement Repository Implementation
// ============================================================================

impl ContentRepository<Announcement> for PgContentRepository {
    async fn list_active(&self) -> ContentResult<Vec<Announcement>> {
        // Newest first; the visibility window is applied by the caller
        // through the shared predicate
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT announcement_id, text, is_active, start_date, end_date,
                   created_at, updated_at
            FROM announcements
            WHERE is_active
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(AnnouncementRow::into_announcement)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ContentResult<Option<Announcement>> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT announcement_id, text, is_active, start_date, end_date,
                   created_at, updated_at
            FROM announcements
            WHERE announcement_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AnnouncementRow::into_announcement))
    }

    async fn insert(&self, announcement: &Announcement) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO announcements (
                announcement_id, text, is_active, start_date, end_date,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(announcement.announcement_id.as_uuid())
        .bind(&announcement.text)
        .bind(announcement.is_active)
        .bind(announcement.start_date)
        .bind(announcement.end_date)
        .bind(announcement.created_at)
        .bind(announcement.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, announcement: &Announcement) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE announcements SET
                text = $2,
                is_active = $3,
                start_date = $4,
                end_date = $5,
                updated_at = $6
            WHERE announcement_id = $1
            "#,
        )
        .bind(announcement.announcement_id.as_uuid())
        .bind(&announcement.text)
        .bind(announcement.is_active)
        .bind(announcement.start_date)
        .bind(announcement.end_date)
        .bind(announcement.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM announcements WHERE announcement_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct HeroRow {
    hero_id: Uuid,
    title: String,
    subtitle: String,
    images: Json<Vec<HeroImage>>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HeroRow {
    fn into_hero(self) -> HeroSection {
        HeroSection {
            hero_id: HeroSectionId::from_uuid(self.hero_id),
            title: self.title,
            subtitle: self.subtitle,
            images: self.images.0,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProgramRow {
    program_id: Uuid,
    name: String,
    description: String,
    image: String,
    time: Option<String>,
    location: Option<String>,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProgramRow {
    fn into_program(self) -> Program {
        Program {
            program_id: ProgramId::from_uuid(self.program_id),
            name: self.name,
            description: self.description,
            image: self.image,
            time: self.time,
            location: self.location,
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ScheduleRow {
    entry_id: Uuid,
    time: String,
    title: String,
    description: String,
    location: Option<String>,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ScheduleRow {
    fn into_entry(self) -> ScheduleEntry {
        ScheduleEntry {
            entry_id: ScheduleEntryId::from_uuid(self.entry_id),
            time: self.time,
            title: self.title,
            description: self.description,
            location: self.location,
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GalleryRow {
    image_id: Uuid,
    url: String,
    alt: String,
    caption: Option<String>,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GalleryRow {
    fn into_image(self) -> GalleryImage {
        GalleryImage {
            image_id: GalleryImageId::from_uuid(self.image_id),
            url: self.url,
            alt: self.alt,
            caption: self.caption,
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    member_id: Uuid,
    name: String,
    role: String,
    image: String,
    bio: Option<String>,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_member(self) -> TeamMember {
        TeamMember {
            member_id: TeamMemberId::from_uuid(self.member_id),
            name: self.name,
            role: self.role,
            image: self.image,
            bio: self.bio,
            is_active: self.is_active,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnnouncementRow {
    announcement_id: Uuid,
    text: String,
    is_active: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AnnouncementRow {
    fn into_announcement(self) -> Announcement {
        Announcement {
            announcement_id: AnnouncementId::from_uuid(self.announcement_id),
            text: self.text,
            is_active: self.is_active,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
