//! Program Entity
//!
//! An event program shown on the public site, ordered by `sort_order`.

use chrono::{DateTime, Utc};
use kernel::id::ProgramId;
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty, optional};
use crate::error::ContentResult;

/// Program entity
#[derive(Debug, Clone)]
pub struct Program {
    pub program_id: ProgramId,
    pub name: String,
    pub description: String,
    /// Public URL of the program image
    pub image: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    /// Create a new active program
    pub fn new(
        name: String,
        description: String,
        image: String,
        time: Option<String>,
        location: Option<String>,
        sort_order: Option<i32>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            program_id: ProgramId::new(),
            name: non_empty("name", name)?,
            description: non_empty("description", description)?,
            image: non_empty("image", image)?,
            time: optional(time),
            location: optional(location),
            is_active: true,
            sort_order: sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ContentEntity for Program {
    const RESOURCE: &'static str = "Program";

    fn id(&self) -> Uuid {
        self.program_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a program; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProgramPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ApplyPatch<ProgramPatch> for Program {
    fn apply(&mut self, patch: ProgramPatch) -> ContentResult<()> {
        if let Some(name) = patch.name {
            self.name = non_empty("name", name)?;
        }
        if let Some(description) = patch.description {
            self.description = non_empty("description", description)?;
        }
        if let Some(image) = patch.image {
            self.image = non_empty("image", image)?;
        }
        if let Some(time) = patch.time {
            self.time = optional(Some(time));
        }
        if let Some(location) = patch.location {
            self.location = optional(Some(location));
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
