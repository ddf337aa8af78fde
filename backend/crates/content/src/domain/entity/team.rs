//! Team Member Entity

use chrono::{DateTime, Utc};
use kernel::id::TeamMemberId;
use uuid::Uuid;

use super::{ApplyPatch, ContentEntity, non_empty, optional};
use crate::error::ContentResult;

/// Team member entity
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub member_id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new active team member
    pub fn new(
        name: String,
        role: String,
        image: String,
        bio: Option<String>,
        sort_order: Option<i32>,
    ) -> ContentResult<Self> {
        let now = Utc::now();

        Ok(Self {
            member_id: TeamMemberId::new(),
            name: non_empty("name", name)?,
            role: non_empty("role", role)?,
            image: non_empty("image", image)?,
            bio: optional(bio),
            is_active: true,
            sort_order: sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ContentEntity for TeamMember {
    const RESOURCE: &'static str = "Team member";

    fn id(&self) -> Uuid {
        self.member_id.into_uuid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update for a team member
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ApplyPatch<TeamMemberPatch> for TeamMember {
    fn apply(&mut self, patch: TeamMemberPatch) -> ContentResult<()> {
        if let Some(name) = patch.name {
            self.name = non_empty("name", name)?;
        }
        if let Some(role) = patch.role {
            self.role = non_empty("role", role)?;
        }
        if let Some(image) = patch.image {
            self.image = non_empty("image", image)?;
        }
        if let Some(bio) = patch.bio {
            self.bio = optional(Some(bio));
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
        let member = TeamMember::new(
            "Priya Nair".to_string(),
            "Event Coordinator".to_string(),
            "https://cdn.example.com/priya.jpg".to_string(),
            None,
            None,
        )
        .unwrap();
        assert!(member.is_active);
        assert_eq!(member.sort_order, 0);
    }

    #[test]
    fn test_new_rejects_missing_role() {
        assert!(
            TeamMember::new(
                "Priya Nair".to_string(),
                "".to_string(),
                "img".to_string(),
                None,
                None,
            )
            .is_err()
        );
    }

    #[test]
    fn test_patch_updates_bio() {
        let mut member = TeamMember::new(
            "Priya Nair".to_string(),
            "Event Coordinator".to_string(),
            "https://cdn.example.com/priya.jpg".to_string(),
            None,
            None,
        )
        .unwrap();
        member
            .apply(TeamMemberPatch {
                bio: Some("Third-year cultural secretary".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(member.bio.is_some());
    }
}
