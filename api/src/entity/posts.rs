use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_name: String,
    pub author_image_url: Option<String>,
    pub author_bio: Option<String>,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub updated_at: Option<DateTimeWithTimeZone>,
    /// JSONB array of tag strings
    pub tags: Option<Json>,
    /// JSONB array of category slugs
    pub categories: Option<Json>,
    /// JSONB object: url / alt / caption
    pub featured_image: Option<Json>,
    pub read_time_minutes: Option<i32>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Json>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
