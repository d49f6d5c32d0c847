//! Blog category domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog category; read-only from the site's perspective.
/// `post_count` is derived at write time by the content pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct BlogCategory {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Display accent, e.g. "#7c3aed"
    pub color: Option<String>,
    pub post_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_display() {
        let id = CategoryId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
