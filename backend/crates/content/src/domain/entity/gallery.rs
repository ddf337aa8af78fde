//! Gallery Image Entity

use chrono::{DateTime, Utc};
use kernel::id::GalleryImageId;
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty, optional};
use crate::error::ContentResult;

/// Gallery image entity
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub image_id: GalleryImageId,
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Create a new active gallery image
    pub fn new(
        url: String,
        alt: String,
        caption: Option<String>,
        sort_order: Option<i32>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            image_id: GalleryImageId::new(),
            url: non_empty("url", url)?,
            alt: non_empty("alt", alt)?,
            caption: optional(caption),
            is_active: true,
            sort_order: sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ContentEntity for GalleryImage {
    const RESOURCE: &'static str = "Gallery image";

    fn id(&self) -> Uuid {
        self.image_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a gallery image
#[derive(Debug, Clone, Default)]
pub struct GalleryImagePatch {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ApplyPatch<GalleryImagePatch> for GalleryImage {
    fn apply(&mut self, patch: GalleryImagePatch) -> ContentResult<()> {
        if let Some(url) = patch.url {
            self.url = non_empty("url", url)?;
        }
        if let Some(alt) = patch.alt {
            self.alt = non_empty("alt", alt)?;
        }
        if let Some(caption) = patch.caption {
            self.caption = optional(Some(caption));
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let img = GalleryImage::new(
            "https://cdn.example.com/g1.jpg".to_string(),
            "Dance performance".to_string(),
            None,
            None,
        )
        .unwrap();
        assert!(img.is_active);
        assert_eq!(img.sort_order, 0);
        assert_eq!(img.caption, None);
    }

    #[test]
    fn test_new_rejects_missing_url() {
        assert!(GalleryImage::new("".to_string(), "alt".to_string(), None, None).is_err());
    }

    #[test]
    fn test_patch_sets_caption() {
        let mut img = GalleryImage::new(
            "https://cdn.example.com/g1.jpg".to_string(),
            "Dance".to_string(),
            None,
            None,
        )
        .unwrap();
        img.apply(GalleryImagePatch {
            caption: Some("Ethnic day 2025".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(img.caption, Some("Ethnic day 2025".to_string()));
    }
}
