//! Test fixtures
//!
//! Factory functions producing realistic domain entities for tests.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Author, BlogCategory, BlogPost, CategoryId, ContactSubmission, FeaturedImage, PostId,
    SeoFields,
};

/// A realistic published post; categories lead with "engineering"
pub fn test_post() -> BlogPost {
    BlogPost {
        id: PostId::new(),
        slug: "designing-fast-sites".to_string(),
        title: "Designing Fast Sites".to_string(),
        subtitle: Some("Performance as a design constraint".to_string()),
        excerpt: "How we keep page weight down without losing the brand.".to_string(),
        content: "## Start with a budget\n\n\
                  Every project gets a performance budget before the first \
                  wireframe. It shapes type choices, imagery, and animation.\n\n\
                  ```js\nconsole.log('hello');\n```\n"
            .to_string(),
        author: Author {
            name: "Priya Raman".to_string(),
            image_url: Some("/assets/team/priya.webp".to_string()),
            bio: Some("Founder & Creative Director".to_string()),
        },
        published_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 3, 20, 12, 30, 0).unwrap(),
        tags: vec!["performance".to_string(), "design".to_string()],
        categories: vec!["engineering".to_string(), "design".to_string()],
        featured_image: Some(FeaturedImage {
            url: "/assets/blog/fast-sites.webp".to_string(),
            alt: "A stopwatch over a wireframe".to_string(),
            caption: None,
        }),
        read_time_minutes: 4,
        featured: false,
        published: true,
        seo: SeoFields {
            meta_title: None,
            meta_description: None,
            keywords: vec!["web performance".to_string()],
        },
        views: 12,
        likes: 3,
    }
}

/// Same fixture with a different slug and title
pub fn test_post_with_slug(slug: &str) -> BlogPost {
    let mut post = test_post();
    post.id = PostId::new();
    post.slug = slug.to_string();
    post.title = format!("Post {}", slug);
    post
}

pub fn test_category() -> BlogCategory {
    BlogCategory {
        id: CategoryId(Uuid::new_v4()),
        name: "Engineering".to_string(),
        slug: "engineering".to_string(),
        description: Some("Build logs and technical notes".to_string()),
        color: Some("#03b3c3".to_string()),
        post_count: 7,
    }
}

/// A submission that passes validation
pub fn test_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        company: Some("Verma Textiles".to_string()),
        project: "Custom Website".to_string(),
        budget: Some("50k-150k".to_string()),
        message: "We need a new site for our spring collection launch.".to_string(),
    }
}
