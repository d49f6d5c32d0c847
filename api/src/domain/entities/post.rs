//! Blog post domain entity
//!
//! Posts are authored outside this system and served read-only.
//! Only the view/like counters mutate, and only server-side.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Unique identifier for a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Valid slug pattern: lowercase letters, numbers, and hyphens
fn slug_regex() -> &'static Regex {
    static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
    SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"))
}

/// Check whether a string is a well-formed post/category slug
pub fn is_valid_slug(slug: &str) -> bool {
    slug_regex().is_match(slug)
}

/// Post author details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Featured image attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// Per-post SEO overrides; fall back to derived values when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoFields {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}

/// A blog post as stored
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: String,
    /// Markdown source; rendered to sanitized HTML on read
    pub content: String,
    pub author: Author,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
    /// Precomputed estimated minutes-to-read
    pub read_time_minutes: i32,
    pub featured: bool,
    pub published: bool,
    pub seo: SeoFields,
    pub views: i64,
    pub likes: i64,
}

impl BlogPost {
    /// Primary category for analytics attribution (first listed, if any)
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_kebab_case() {
        assert!(is_valid_slug("hello-world"));
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("web-design-2026"));
    }

    #[test]
    fn slug_rejects_bad_input() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Hello-World"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("../etc/passwd"));
    }

    #[test]
    fn primary_category_is_first() {
        let post = crate::test_utils::test_post();
        assert_eq!(post.primary_category(), Some("engineering"));
    }

    #[test]
    fn primary_category_empty() {
        let mut post = crate::test_utils::test_post();
        post.categories.clear();
        assert_eq!(post.primary_category(), None);
    }

    #[test]
    fn post_id_display() {
        let id = PostId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
