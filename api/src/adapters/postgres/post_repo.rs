//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::entities::{Author, BlogPost, PostId, SeoFields};
use crate::domain::ports::{PostFilter, PostRepository};
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Build the WHERE clause for a listing filter. Tags and categories are
/// stored as JSONB arrays, so membership tests go through `@>`.
fn published_condition(filter: &PostFilter) -> Condition {
    let mut cond = Condition::all().add(posts::Column::Published.eq(true));

    if let Some(query) = &filter.query {
        let pattern = format!("%{}%", query);
        cond = cond.add(
            Condition::any()
                .add(Expr::cust_with_values("title ILIKE ?", [pattern.clone()]))
                .add(Expr::cust_with_values("excerpt ILIKE ?", [pattern.clone()]))
                .add(Expr::cust_with_values("tags::text ILIKE ?", [pattern])),
        );
    }

    if !filter.categories.is_empty() {
        let mut any = Condition::any();
        for slug in &filter.categories {
            any = any.add(Expr::cust_with_values(
                "categories @> ?",
                [serde_json::json!([slug])],
            ));
        }
        cond = cond.add(any);
    }

    if !filter.tags.is_empty() {
        let mut any = Condition::any();
        for tag in &filter.tags {
            any = any.add(Expr::cust_with_values(
                "tags @> ?",
                [serde_json::json!([tag])],
            ));
        }
        cond = cond.add(any);
    }

    if let Some(featured) = filter.featured {
        cond = cond.add(posts::Column::Featured.eq(featured));
    }

    cond
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        let result = posts::Entity::find()
            .filter(posts::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_published(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, DomainError> {
        let results = posts::Entity::find()
            .filter(published_condition(filter))
            .order_by_desc(posts::Column::PublishedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_published(&self, filter: &PostFilter) -> Result<i64, DomainError> {
        let count = posts::Entity::find()
            .filter(published_condition(filter))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn find_featured(&self) -> Result<Option<BlogPost>, DomainError> {
        let result = posts::Entity::find()
            .filter(posts::Column::Published.eq(true))
            .filter(posts::Column::Featured.eq(true))
            .order_by_desc(posts::Column::PublishedAt)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn increment_views(&self, id: &PostId) -> Result<(), DomainError> {
        // Raw SQL for an atomic increment
        let stmt = sea_orm::Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "UPDATE posts SET views = COALESCE(views, 0) + 1 WHERE id = $1",
            [id.0.into()],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn increment_likes(&self, id: &PostId) -> Result<i64, DomainError> {
        let stmt = sea_orm::Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "UPDATE posts SET likes = COALESCE(likes, 0) + 1 WHERE id = $1 RETURNING likes",
            [id.0.into()],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))?;

        row.try_get::<i64>("", "likes")
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

fn json_strings(value: Option<serde_json::Value>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for BlogPost {
    fn from(model: posts::Model) -> Self {
        BlogPost {
            id: PostId(model.id),
            slug: model.slug,
            title: model.title,
            subtitle: model.subtitle,
            excerpt: model.excerpt,
            content: model.content,
            author: Author {
                name: model.author_name,
                image_url: model.author_image_url,
                bio: model.author_bio,
            },
            published_at: model
                .published_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
            updated_at: model
                .updated_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
            tags: json_strings(model.tags),
            categories: json_strings(model.categories),
            featured_image: model
                .featured_image
                .and_then(|v| serde_json::from_value(v).ok()),
            read_time_minutes: model.read_time_minutes.unwrap_or(0),
            featured: model.featured.unwrap_or(false),
            published: model.published.unwrap_or(false),
            seo: SeoFields {
                meta_title: model.meta_title,
                meta_description: model.meta_description,
                keywords: json_strings(model.keywords),
            },
            views: model.views.unwrap_or(0),
            likes: model.likes.unwrap_or(0),
        }
    }
}
