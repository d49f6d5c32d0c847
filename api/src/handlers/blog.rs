//! Blog handlers
//!
//! Endpoints for the post listing, single posts, categories, and likes.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::render::read_time_minutes;
use crate::app::{BlogListing, ListingOutcome, Pagination, RenderedPost, DEFAULT_PAGE_SIZE};
use crate::domain::entities::{is_valid_slug, Author, BlogCategory, BlogPost, FeaturedImage};
use crate::domain::ports::PostFilter;
use crate::error::AppError;
use crate::handlers::{session_id, DataResponse};
use crate::AppState;

/// Query parameters for the post listing
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Free-text search
    pub query: Option<String>,
    /// Comma-separated category slugs
    pub categories: Option<String>,
    /// Comma-separated tag slugs
    pub tags: Option<String>,
    pub featured: Option<bool>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn split_slugs(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            image_url: author.image_url,
            bio: author.bio,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl From<FeaturedImage> for ImageResponse {
    fn from(image: FeaturedImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
            caption: image.caption,
        }
    }
}

/// A post as shown on listing cards; no body content
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: String,
    pub author: AuthorResponse,
    pub published_at: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub featured_image: Option<ImageResponse>,
    pub read_time_minutes: i32,
    pub featured: bool,
    pub views: i64,
    pub likes: i64,
}

impl From<BlogPost> for PostSummaryResponse {
    fn from(post: BlogPost) -> Self {
        let read_time = if post.read_time_minutes > 0 {
            post.read_time_minutes
        } else {
            read_time_minutes(&post.content)
        };
        Self {
            slug: post.slug,
            title: post.title,
            subtitle: post.subtitle,
            excerpt: post.excerpt,
            author: post.author.into(),
            published_at: post.published_at.to_rfc3339(),
            tags: post.tags,
            categories: post.categories,
            featured_image: post.featured_image.map(Into::into),
            read_time_minutes: read_time,
            featured: post.featured,
            views: post.views,
            likes: post.likes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub post_count: i32,
}

impl From<BlogCategory> for CategoryResponse {
    fn from(category: BlogCategory) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            color: category.color,
            post_count: category.post_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub page: i64,
    pub total_pages: i64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<Pagination> for PaginationResponse {
    fn from(p: Pagination) -> Self {
        Self {
            page: p.page,
            total_pages: p.total_pages,
            has_prev: p.has_prev,
            has_next: p.has_next,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingData {
    pub posts: Vec<PostSummaryResponse>,
    pub featured: Option<PostSummaryResponse>,
    pub categories: Vec<CategoryResponse>,
    pub pagination: PaginationResponse,
}

impl From<BlogListing> for ListingData {
    fn from(listing: BlogListing) -> Self {
        Self {
            posts: listing.posts.into_iter().map(Into::into).collect(),
            featured: listing.featured.map(Into::into),
            categories: listing.categories.into_iter().map(Into::into).collect(),
            pagination: listing.pagination.into(),
        }
    }
}

/// Listing envelope. `superseded` marks a response overtaken by a newer
/// fetch from the same session; the client drops it instead of rendering.
#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub data: Option<ListingData>,
    pub superseded: bool,
}

/// GET /api/blog/posts
///
/// Paginated listing with free-text/category/tag/featured filters.
pub async fn list_posts(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ListPostsResponse>, AppError> {
    let filter = PostFilter {
        query: query
            .query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty()),
        categories: split_slugs(query.categories.as_deref()),
        tags: split_slugs(query.tags.as_deref()),
        featured: query.featured,
    };

    let session = state.sessions.session(&session_id(&headers, &addr));
    let outcome = state
        .blog_service
        .list(query.page, query.limit, &filter, &session.listing_guard)
        .await?;

    Ok(Json(match outcome {
        ListingOutcome::Fresh(listing) => ListPostsResponse {
            data: Some(listing.into()),
            superseded: false,
        },
        ListingOutcome::Superseded => ListPostsResponse {
            data: None,
            superseded: true,
        },
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// A fully rendered post
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: String,
    /// Sanitized HTML rendered from the Markdown source
    pub html: String,
    pub author: AuthorResponse,
    pub published_display: String,
    pub updated_display: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub featured_image: Option<ImageResponse>,
    pub read_time_minutes: i32,
    pub views: i64,
    pub likes: i64,
    pub meta: MetaResponse,
}

impl From<RenderedPost> for PostResponse {
    fn from(post: RenderedPost) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            subtitle: post.subtitle,
            excerpt: post.excerpt,
            html: post.html,
            author: post.author.into(),
            published_display: post.published_display,
            updated_display: post.updated_display,
            tags: post.tags,
            categories: post.categories,
            featured_image: post.featured_image.map(Into::into),
            read_time_minutes: post.read_time_minutes,
            views: post.views,
            likes: post.likes,
            meta: MetaResponse {
                title: post.meta.title,
                description: post.meta.description,
                keywords: post.meta.keywords,
            },
        }
    }
}

/// GET /api/blog/posts/:slug
///
/// Rendered post. Bumps the view counter and fires the view event once
/// per session.
pub async fn get_post(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Json<DataResponse<PostResponse>>, AppError> {
    if !is_valid_slug(&slug) {
        return Err(AppError::BadRequest(format!("Invalid slug: {}", slug)));
    }

    let session = state.sessions.session(&session_id(&headers, &addr));
    let mut context = session.context.lock().await;
    let rendered = state.blog_service.view(&slug, &mut context).await?;

    Ok(Json(DataResponse {
        data: rendered.into(),
    }))
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: i64,
}

/// POST /api/blog/posts/:slug/like
pub async fn like_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LikeResponse>, AppError> {
    if !is_valid_slug(&slug) {
        return Err(AppError::BadRequest(format!("Invalid slug: {}", slug)));
    }

    let likes = state.blog_service.like(&slug).await?;
    Ok(Json(LikeResponse { likes }))
}

/// GET /api/blog/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<CategoryResponse>>>, AppError> {
    use crate::domain::ports::CategoryRepository;

    let categories = state.category_repo.find_all().await?;
    Ok(Json(DataResponse {
        data: categories.into_iter().map(Into::into).collect(),
    }))
}
