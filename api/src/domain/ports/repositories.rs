//! Repository port traits
//!
//! These traits define the interface for reading blog content.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{BlogCategory, BlogPost, PostId};
use crate::error::DomainError;

/// Filter set for the post listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    /// Free-text query matched against title, excerpt, and tags
    pub query: Option<String>,
    /// Category slugs; a post matches if it carries any of them
    pub categories: Vec<String>,
    /// Tag slugs; a post matches if it carries any of them
    pub tags: Vec<String>,
    /// Restrict to featured (or explicitly non-featured) posts
    pub featured: Option<bool>,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.featured.is_none()
    }
}

/// Repository for BlogPost entities. Content is authored externally;
/// the site reads posts and bumps counters, nothing else.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a published post by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError>;

    /// Published posts matching a filter, newest first, paginated
    async fn find_published(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, DomainError>;

    /// Count of published posts matching a filter (for pagination)
    async fn count_published(&self, filter: &PostFilter) -> Result<i64, DomainError>;

    /// The featured post to pin above the listing, if any
    async fn find_featured(&self) -> Result<Option<BlogPost>, DomainError>;

    /// Atomically bump the view counter
    async fn increment_views(&self, id: &PostId) -> Result<(), DomainError>;

    /// Atomically bump the like counter, returning the new total
    async fn increment_likes(&self, id: &PostId) -> Result<i64, DomainError>;
}

/// Repository for BlogCategory entities; read-only
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by name
    async fn find_all(&self) -> Result<Vec<BlogCategory>, DomainError>;
}
