use crate::ids::{CategoryTag, ProjectId};

/// One entry of the static project table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    /// Human readable category shown as the modal badge.
    pub category: &'static str,
    /// Slug matched against filter buttons.
    pub tag: &'static str,
    pub description: &'static str,
    /// Trusted, pre-authored HTML fragment.
    pub details: &'static str,
}

impl ProjectRecord {
    pub fn project_id(&self) -> ProjectId {
        ProjectId::new(self.id)
    }

    pub fn category_tag(&self) -> CategoryTag {
        CategoryTag::new(self.tag)
    }
}
