//! Visible Announcements Use Case
//!
//! The public list: active announcements filtered through the single
//! visibility predicate. `now` is injected so the window logic is
//! testable without a clock.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entity::announcement::Announcement;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// Visible announcements use case
pub struct VisibleAnnouncements<R>
where
    R: ContentRepository<Announcement>,
{
    repo: Arc<R>,
}

impl<R> VisibleAnnouncements<R>
where
    R: ContentRepository<Announcement>,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Announcements live at `now`, newest first
    ///
    /// The repository returns active rows in creation order; the window
    /// check runs here through [`Announcement::is_live`] so the rule is
    /// never duplicated in SQL.
    pub async fn execute(&self, now: DateTime<Utc>) -> ContentResult<Vec<Announcement>> {
        let announcements = self.repo.list_active().await?;

        Ok(announcements
            .into_iter()
            .filter(|a| a.is_live(now))
            .collect())
    }
}
