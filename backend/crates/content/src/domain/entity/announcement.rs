//! Announcement Entity
//!
//! Announcements carry an optional visibility window. Whether one is
//! currently shown is computed at read time by [`Announcement::is_live`];
//! nothing about visibility is persisted.

use chrono::{DateTime, Utc};
use kernel::id::AnnouncementId;
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty};
use crate::error::ContentResult;

/// Announcement entity
#[derive(Debug, Clone)]
pub struct Announcement {
    pub announcement_id: AnnouncementId,
    pub text: String,
    pub is_active: bool,
    /// Visibility window start; unset means "always was live"
    pub start_date: Option<DateTime<Utc>>,
    /// Visibility window end; unset means "never expires"
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// Create a new announcement (always created active)
    pub fn new(
        text: String,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            announcement_id: AnnouncementId::new(),
            text: non_empty("text", text)?,
            is_active: true,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// The single visibility predicate
    ///
    /// Live iff active AND (no start date or start ≤ now) AND (no end date
    /// or end ≥ now). Both the public list endpoint and any admin preview
    /// go through this one function; the window logic exists nowhere else.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date.is_none_or(|start| start <= now)
            && self.end_date.is_none_or(|end| end >= now)
    }
}

impl ContentEntity for Announcement {
    const RESOURCE: &'static str = "Announcement";

    fn id(&self) -> Uuid {
        self.announcement_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for an announcement
///
/// Date fields use a double `Option`: the outer level is "was the key
/// present", the inner is the new value (`None` clears the bound).
#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    pub text: Option<String>,
    pub is_active: Option<bool>,
    pub start_date: Option<Option<DateTime<Utc>>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
}

impl ApplyPatch<AnnouncementPatch> for Announcement {
    fn apply(&mut self, patch: AnnouncementPatch) -> ContentResult<()> {
        if let Some(text) = patch.text {
            self.text = non_empty("text", text)?;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap()
    }

    fn announcement(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Announcement {
        Announcement::new("Welcome to ETHNOSPARK".to_string(), start, end).unwrap()
    }

    #[test]
    fn test_live_with_no_bounds() {
        assert!(announcement(None, None).is_live(at(2025)));
    }

    #[test]
    fn test_live_within_window() {
        let a = announcement(Some(at(2024)), Some(at(2026)));
        assert!(a.is_live(at(2025)));
    }

    #[test]
    fn test_not_live_before_start() {
        let a = announcement(Some(at(2099)), None);
        assert!(!a.is_live(at(2025)));
    }

    #[test]
    fn test_not_live_after_end() {
        let a = announcement(None, Some(at(2024)));
        assert!(!a.is_live(at(2025)));
    }

    #[test]
    fn test_live_only_start_bound_passed() {
        let a = announcement(Some(at(2024)), None);
        assert!(a.is_live(at(2025)));
    }

    #[test]
    fn test_live_only_end_bound_ahead() {
        let a = announcement(None, Some(at(2026)));
        assert!(a.is_live(at(2025)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let now = at(2025);
        assert!(announcement(Some(now), None).is_live(now));
        assert!(announcement(None, Some(now)).is_live(now));
        assert!(announcement(Some(now), Some(now)).is_live(now));
    }

    #[test]
    fn test_inactive_never_live() {
        let mut a = announcement(None, None);
        a.is_active = false;
        assert!(!a.is_live(at(2025)));

        // Even inside a valid window
        let mut a = announcement(Some(at(2024)), Some(at(2026)));
        a.is_active = false;
        assert!(!a.is_live(at(2025)));
    }

    #[test]
    fn test_created_active() {
        assert!(announcement(None, None).is_active);
    }

    #[test]
    fn test_new_rejects_empty_text() {
        assert!(Announcement::new("".to_string(), None, None).is_err());
    }

    #[test]
    fn test_patch_clears_window() {
        let mut a = announcement(Some(at(2099)), None);
        assert!(!a.is_live(at(2025)));

        a.apply(AnnouncementPatch {
            start_date: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert!(a.is_live(at(2025)));
    }

    #[test]
    fn test_patch_deactivates() {
        let mut a = announcement(None, None);
        a.apply(AnnouncementPatch {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(!a.is_live(at(2025)));
    }
}
