//! Blog service
//!
//! Listing, single-post reads, and the analytics/view-counter side effects
//! around them. A listing counts first to clamp the requested page, then
//! fetches posts, categories and the featured post concurrently; a failure
//! in any of them collapses to one user-facing error so the client can
//! offer a manual retry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::app::render::{format_display_date, read_time_minutes, render_markdown};
use crate::app::seo::{post_meta, PostMeta};
use crate::domain::entities::{
    Author, BlogCategory, BlogPost, FeaturedImage, SessionContext,
};
use crate::domain::ports::{
    AnalyticsClient, AnalyticsEvent, CategoryRepository, PostFilter, PostRepository,
};
use crate::error::DomainError;

pub const DEFAULT_PAGE_SIZE: i64 = 9;
pub const MAX_PAGE_SIZE: i64 = 50;

/// Token identifying one listing fetch. Only the most recently issued
/// token's response may be applied; anything older is superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic token source. Rapid refiltering issues a new token per fetch;
/// a response is applied only if its token is still the latest, so a slow
/// stale response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct LatestOnly {
    counter: AtomicU64,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.counter.load(Ordering::SeqCst) == token.0
    }
}

/// Pagination summary for the listing controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub total_pages: i64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    pub fn for_page(page: i64, total: i64, page_size: i64) -> Self {
        let total_pages = ((total + page_size - 1) / page_size).max(1);
        let page = page.clamp(1, total_pages);
        Self {
            page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}

/// Merged view state for the blog index
#[derive(Debug, Clone, Serialize)]
pub struct BlogListing {
    pub posts: Vec<BlogPost>,
    pub featured: Option<BlogPost>,
    pub categories: Vec<BlogCategory>,
    pub pagination: Pagination,
}

/// Outcome of a listing fetch under the stale-response guard
#[derive(Debug)]
pub enum ListingOutcome {
    Fresh(BlogListing),
    /// A newer fetch was issued while this one was in flight
    Superseded,
}

/// A post prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: String,
    pub html: String,
    pub author: Author,
    pub published_display: String,
    pub updated_display: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
    pub read_time_minutes: i32,
    pub views: i64,
    pub likes: i64,
    pub meta: PostMeta,
}

/// Service for the blog content pipeline
pub struct BlogService<PR, CR, AC>
where
    PR: PostRepository,
    CR: CategoryRepository,
    AC: AnalyticsClient,
{
    posts: Arc<PR>,
    categories: Arc<CR>,
    analytics: Arc<AC>,
}

impl<PR, CR, AC> BlogService<PR, CR, AC>
where
    PR: PostRepository,
    CR: CategoryRepository,
    AC: AnalyticsClient,
{
    pub fn new(posts: Arc<PR>, categories: Arc<CR>, analytics: Arc<AC>) -> Self {
        Self {
            posts,
            categories,
            analytics,
        }
    }

    /// Fetch one listing page. Issues a request token from the caller's
    /// guard up front and refuses to surface the result if a newer fetch
    /// started on the same guard in the meantime. The guard is scoped to
    /// one session; unrelated sessions never supersede each other.
    pub async fn list(
        &self,
        page: i64,
        page_size: i64,
        filter: &PostFilter,
        guard: &LatestOnly,
    ) -> Result<ListingOutcome, DomainError> {
        let token = guard.issue();

        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        // Count first so an out-of-range page clamps to the last real page
        // and the offset agrees with the page the envelope reports.
        let total = self.posts.count_published(filter).await?;
        let pagination = Pagination::for_page(page, total, page_size);
        let offset = (pagination.page - 1) * page_size;

        // The featured post is only pinned on an unfiltered first page.
        let want_featured = pagination.page == 1 && filter.is_empty();

        let (posts, categories, featured) = tokio::join!(
            self.posts.find_published(filter, page_size, offset),
            self.categories.find_all(),
            async {
                if want_featured {
                    self.posts.find_featured().await
                } else {
                    Ok(None)
                }
            }
        );

        let listing = BlogListing {
            posts: posts?,
            featured: featured?,
            categories: categories?,
            pagination,
        };

        if guard.is_latest(token) {
            Ok(ListingOutcome::Fresh(listing))
        } else {
            Ok(ListingOutcome::Superseded)
        }
    }

    /// Fetch and render one published post.
    ///
    /// Bumps the view counter (best effort) and fires the post-viewed
    /// analytics event exactly once per session and slug.
    pub async fn view(
        &self,
        slug: &str,
        session: &mut SessionContext,
    ) -> Result<RenderedPost, DomainError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.published)
            .ok_or_else(|| DomainError::NotFound(format!("post '{}'", slug)))?;

        if let Err(e) = self.posts.increment_views(&post.id).await {
            tracing::warn!("View counter bump failed for '{}': {}", slug, e);
        }

        if session.mark_viewed(slug) {
            let event = AnalyticsEvent::PostViewed {
                slug: post.slug.clone(),
                title: post.title.clone(),
                category: post.primary_category().map(String::from),
                timestamp: Utc::now(),
            };
            if let Err(e) = self.analytics.track(event).await {
                tracing::warn!("Analytics dispatch failed for '{}': {}", slug, e);
            }
        }

        Ok(Self::render(post))
    }

    /// Bump the like counter, returning the new total
    pub async fn like(&self, slug: &str) -> Result<i64, DomainError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.published)
            .ok_or_else(|| DomainError::NotFound(format!("post '{}'", slug)))?;

        self.posts.increment_likes(&post.id).await
    }

    fn render(post: BlogPost) -> RenderedPost {
        let meta = post_meta(&post);
        let html = render_markdown(&post.content);
        // Posts normally arrive with a precomputed read time; derive it
        // when the pipeline left it unset.
        let read_time = if post.read_time_minutes > 0 {
            post.read_time_minutes
        } else {
            read_time_minutes(&post.content)
        };

        RenderedPost {
            slug: post.slug,
            title: post.title,
            subtitle: post.subtitle,
            excerpt: post.excerpt,
            html,
            author: post.author,
            published_display: format_display_date(&post.published_at),
            updated_display: format_display_date(&post.updated_at),
            tags: post.tags,
            categories: post.categories,
            featured_image: post.featured_image,
            read_time_minutes: read_time,
            views: post.views,
            likes: post.likes,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_only_supersedes_older_tokens() {
        let guard = LatestOnly::new();
        let first = guard.issue();
        assert!(guard.is_latest(first));

        let second = guard.issue();
        assert!(!guard.is_latest(first));
        assert!(guard.is_latest(second));
    }

    #[test]
    fn pagination_middle_page() {
        let p = Pagination::for_page(2, 27, 9); // 3 pages
        assert_eq!(p.total_pages, 3);
        assert!(p.has_prev);
        assert!(p.has_next);
    }

    #[test]
    fn pagination_first_page_disables_prev() {
        let p = Pagination::for_page(1, 27, 9);
        assert!(!p.has_prev);
        assert!(p.has_next);
    }

    #[test]
    fn pagination_last_page_disables_next() {
        let p = Pagination::for_page(3, 27, 9);
        assert!(p.has_prev);
        assert!(!p.has_next);
    }

    #[test]
    fn pagination_empty_listing_is_one_page() {
        let p = Pagination::for_page(1, 0, 9);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_prev);
        assert!(!p.has_next);
    }

    #[test]
    fn pagination_clamps_out_of_range_page() {
        let p = Pagination::for_page(99, 10, 9); // 2 pages
        assert_eq!(p.page, 2);
        assert!(!p.has_next);
    }
}
