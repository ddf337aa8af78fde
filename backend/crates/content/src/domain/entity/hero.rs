//! Hero Section Entity
//!
//! The landing banner. At most one section is active at a time; reads
//! lazily provision a default-content section when none exists.

use chrono::{DateTime, Utc};
use kernel::id::HeroSectionId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty};
use crate::error::ContentResult;

/// Title shown before an admin has saved anything
pub const DEFAULT_TITLE: &str = "ETHNOSPARK 2025";

/// Subtitle shown before an admin has saved anything
pub const DEFAULT_SUBTITLE: &str =
    "College Ethnic Day – Celebrating Culture, Unity & Diversity";

/// Placeholder slide shown before an admin has saved anything
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429";

/// One slide of the hero carousel (stored as JSON on the section row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroImage {
    pub url: String,
    #[serde(default = "HeroImage::default_alt")]
    pub alt: String,
}

impl HeroImage {
    fn default_alt() -> String {
        "Hero Image".to_string()
    }
}

/// Hero section entity
#[derive(Debug, Clone)]
pub struct HeroSection {
    pub hero_id: HeroSectionId,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<HeroImage>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HeroSection {
    /// Create a new active hero section
    pub fn new(
        title: String,
        subtitle: String,
        images: Vec<HeroImage>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            hero_id: HeroSectionId::new(),
            title: non_empty("title", title)?,
            subtitle: non_empty("subtitle", subtitle)?,
            images,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// The section shown before an admin has saved anything
    pub fn default_content() -> Self {
        Self::new(
            DEFAULT_TITLE.to_string(),
            DEFAULT_SUBTITLE.to_string(),
            vec![HeroImage {
                url: DEFAULT_IMAGE_URL.to_string(),
                alt: "Hero Image".to_string(),
            }],
        )
        .expect("default hero content is valid")
    }
}

impl ContentEntity for HeroSection {
    const RESOURCE: &'static str = "Hero section";

    fn id(&self) -> Uuid {
        self.hero_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for the active hero section
#[derive(Debug, Clone, Default)]
pub struct HeroPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub images: Option<Vec<HeroImage>>,
}

impl ApplyPatch<HeroPatch> for HeroSection {
    fn apply(&mut self, patch: HeroPatch) -> ContentResult<()> {
        if let Some(title) = patch.title {
            self.title = non_empty("title", title)?;
        }
        if let Some(subtitle) = patch.subtitle {
            self.subtitle = non_empty("subtitle", subtitle)?;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let hero = HeroSection::default_content();
        assert_eq!(hero.title, "ETHNOSPARK 2025");
        assert!(hero.is_active);
        assert_eq!(hero.images.len(), 1);
    }

    #[test]
    fn test_new_rejects_blank_title() {
        assert!(HeroSection::new("".to_string(), "sub".to_string(), vec![]).is_err());
    }

    #[test]
    fn test_patch_keeps_images_when_absent() {
        let mut hero = HeroSection::default_content();
        hero.apply(HeroPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(hero.title, "New Title");
        assert_eq!(hero.images.len(), 1);
    }

    #[test]
    fn test_hero_image_alt_defaults_on_deserialize() {
        let image: HeroImage =
            serde_json::from_str(r#"{"url":"https://cdn.example.com/h.jpg"}"#).unwrap();
        assert_eq!(image.alt, "Hero Image");
    }
}
