//! Schedule Entry Entity

use chrono::{DateTime, Utc};
use kernel::id::ScheduleEntryId;
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty, optional};
use crate::error::ContentResult;

/// Schedule entry entity
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub entry_id: ScheduleEntryId,
    /// Display time label ("10:00 AM"), free-form text
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduleEntry {
    /// Create a new active schedule entry
    pub fn new(
        time: String,
        title: String,
        description: String,
        location: Option<String>,
        sort_order: Option<i32>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            entry_id: ScheduleEntryId::new(),
            time: non_empty("time", time)?,
            title: non_empty("title", title)?,
            description: non_empty("description", description)?,
            location: optional(location),
            is_active: true,
            sort_order: sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ContentEntity for ScheduleEntry {
    const RESOURCE: &'static str = "Schedule entry";

    fn id(&self) -> Uuid {
        self.entry_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a schedule entry
#[derive(Debug, Clone, Default)]
pub struct ScheduleEntryPatch {
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ApplyPatch<ScheduleEntryPatch> for ScheduleEntry {
    fn apply(&mut self, patch: ScheduleEntryPatch) -> ContentResult<()> {
        if let Some(time) = patch.time {
            self.time = non_empty("time", time)?;
        }
        if let Some(title) = patch.title {
            self.title = non_empty("title", title)?;
        }
        if let Some(description) = patch.description {
            self.description = non_empty("description", description)?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let entry = ScheduleEntry::new(
            "9:00 AM".to_string(),
            "Opening Ceremony".to_string(),
            "Flag hoisting and welcome address".to_string(),
            Some("Main Ground".to_string()),
            None,
        )
        .unwrap();
        assert!(entry.is_active);
        assert_eq!(entry.sort_order, 0);
    }

    #[test]
    fn test_new_rejects_blank_time() {
        let result = ScheduleEntry::new(
            "  ".to_string(),
            "Opening".to_string(),
            "desc".to_string(),
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_updates_title() {
        let mut entry = ScheduleEntry::new(
            "9:00 AM".to_string(),
            "Opening Ceremony".to_string(),
            "Flag hoisting".to_string(),
            None,
            Some(1),
        )
        .unwrap();
        entry
            .apply(ScheduleEntryPatch {
                title: Some("Inauguration".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(entry.title, "Inauguration");
        assert_eq!(entry.sort_order, 1);
    }
}
