//! Mock implementations of port traits
//!
//! In-memory implementations configurable per test. Recording variants
//! capture calls so tests can assert on side effects.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{BlogCategory, BlogPost, ContactSubmission, PostId};
use crate::domain::ports::{
    AnalyticsClient, AnalyticsEvent, CategoryRepository, ContactNotifier, CountryCode, GeoClient,
    PostFilter, PostRepository,
};
use crate::error::{AnalyticsError, DomainError, GeoError, NotifyError};

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<String, BlogPost>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: BlogPost) -> Self {
        self.posts
            .write()
            .unwrap()
            .insert(post.slug.clone(), post);
        self
    }
}

fn matches(filter: &PostFilter, post: &BlogPost) -> bool {
    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        let hit = post.title.to_lowercase().contains(&query)
            || post.excerpt.to_lowercase().contains(&query)
            || post.tags.iter().any(|t| t.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }
    if !filter.categories.is_empty()
        && !filter.categories.iter().any(|c| post.categories.contains(c))
    {
        return false;
    }
    if !filter.tags.is_empty() && !filter.tags.iter().any(|t| post.tags.contains(t)) {
        return false;
    }
    if let Some(featured) = filter.featured {
        if post.featured != featured {
            return false;
        }
    }
    true
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        Ok(self.posts.read().unwrap().get(slug).cloned())
    }

    async fn find_published(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|p| p.published && matches(filter, p))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_published(&self, filter: &PostFilter) -> Result<i64, DomainError> {
        Ok(self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|p| p.published && matches(filter, p))
            .count() as i64)
    }

    async fn find_featured(&self) -> Result<Option<BlogPost>, DomainError> {
        let mut featured: Vec<BlogPost> = self
            .posts
            .read()
            .unwrap()
            .values()
            .filter(|p| p.published && p.featured)
            .cloned()
            .collect();
        featured.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(featured.into_iter().next())
    }

    async fn increment_views(&self, id: &PostId) -> Result<(), DomainError> {
        let mut posts = self.posts.write().unwrap();
        let post = posts
            .values_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))?;
        post.views += 1;
        Ok(())
    }

    async fn increment_likes(&self, id: &PostId) -> Result<i64, DomainError> {
        let mut posts = self.posts.write().unwrap();
        let post = posts
            .values_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))?;
        post.likes += 1;
        Ok(post.likes)
    }
}

/// Every call fails, as if the database were down
pub struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<BlogPost>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_published(
        &self,
        _filter: &PostFilter,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<BlogPost>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn count_published(&self, _filter: &PostFilter) -> Result<i64, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_featured(&self) -> Result<Option<BlogPost>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn increment_views(&self, _id: &PostId) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn increment_likes(&self, _id: &PostId) -> Result<i64, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}

// ============================================================================
// In-Memory Category Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Vec<BlogCategory>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: BlogCategory) -> Self {
        self.categories.write().unwrap().push(category);
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<BlogCategory>, DomainError> {
        let mut categories = self.categories.read().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

// ============================================================================
// Analytics
// ============================================================================

/// Records every tracked event for later assertions
#[derive(Default)]
pub struct RecordingAnalyticsClient {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalyticsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsClient for RecordingAnalyticsClient {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Rejects every event
pub struct FailingAnalyticsClient;

#[async_trait]
impl AnalyticsClient for FailingAnalyticsClient {
    async fn track(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Rejected {
            status: 503,
            message: "collector unavailable".to_string(),
        })
    }
}

// ============================================================================
// Geolocation
// ============================================================================

/// Always answers with the configured country (or none)
pub struct StaticGeoClient {
    country: Option<String>,
}

impl StaticGeoClient {
    pub fn new(country: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_string),
        }
    }
}

#[async_trait]
impl GeoClient for StaticGeoClient {
    async fn lookup_country(&self, _ip: &str) -> Result<Option<CountryCode>, GeoError> {
        Ok(self.country.clone().map(CountryCode))
    }
}

/// Every lookup fails
pub struct FailingGeoClient;

#[async_trait]
impl GeoClient for FailingGeoClient {
    async fn lookup_country(&self, _ip: &str) -> Result<Option<CountryCode>, GeoError> {
        Err(GeoError::Malformed("unexpected payload".to_string()))
    }
}

/// Answers after a configurable delay, to exercise the timeout path
pub struct SlowGeoClient {
    delay: Duration,
    country: String,
}

impl SlowGeoClient {
    pub fn new(delay: Duration, country: &str) -> Self {
        Self {
            delay,
            country: country.to_string(),
        }
    }
}

#[async_trait]
impl GeoClient for SlowGeoClient {
    async fn lookup_country(&self, _ip: &str) -> Result<Option<CountryCode>, GeoError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(CountryCode(self.country.clone())))
    }
}

// ============================================================================
// Contact delivery
// ============================================================================

/// Records delivered submissions
#[derive(Default)]
pub struct RecordingNotifier {
    deliveries: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<ContactSubmission> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        self.deliveries.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Every delivery fails with the configured error
pub struct FailingNotifier {
    error: fn() -> NotifyError,
}

impl FailingNotifier {
    pub fn rejected() -> Self {
        Self {
            error: || NotifyError::Rejected {
                status: 500,
                message: "upstream rejected".to_string(),
            },
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            error: || NotifyError::Unconfigured,
        }
    }
}

#[async_trait]
impl ContactNotifier for FailingNotifier {
    async fn deliver(&self, _submission: &ContactSubmission) -> Result<(), NotifyError> {
        Err((self.error)())
    }
}
