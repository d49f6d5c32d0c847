//! SEO metadata derivation
//!
//! Posts may carry explicit SEO overrides; anything missing is derived
//! from the post itself.

use serde::Serialize;

use crate::domain::entities::BlogPost;

pub const SITE_NAME: &str = "Lumina Studio";
const MAX_DESCRIPTION_CHARS: usize = 160;

/// Resolved metadata for a post page head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Truncate on a char boundary, appending an ellipsis when cut
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", clipped.trim_end())
}

pub fn post_meta(post: &BlogPost) -> PostMeta {
    let title = post
        .seo
        .meta_title
        .clone()
        .unwrap_or_else(|| format!("{} | {}", post.title, SITE_NAME));

    let description = clip(
        post.seo
            .meta_description
            .as_deref()
            .unwrap_or(&post.excerpt),
        MAX_DESCRIPTION_CHARS,
    );

    let keywords = if post.seo.keywords.is_empty() {
        post.tags.clone()
    } else {
        post.seo.keywords.clone()
    };

    PostMeta {
        title,
        description,
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_post;

    #[test]
    fn derives_title_from_post_when_no_override() {
        let post = test_post();
        let meta = post_meta(&post);
        assert_eq!(meta.title, format!("{} | Lumina Studio", post.title));
    }

    #[test]
    fn override_title_wins() {
        let mut post = test_post();
        post.seo.meta_title = Some("Custom Title".to_string());
        assert_eq!(post_meta(&post).title, "Custom Title");
    }

    #[test]
    fn description_is_clipped_to_160() {
        let mut post = test_post();
        post.seo.meta_description = None;
        post.excerpt = "x".repeat(400);
        let meta = post_meta(&post);
        assert!(meta.description.chars().count() <= 160);
        assert!(meta.description.ends_with('…'));
    }

    #[test]
    fn keywords_fall_back_to_tags() {
        let mut post = test_post();
        post.seo.keywords.clear();
        let meta = post_meta(&post);
        assert_eq!(meta.keywords, post.tags);
    }
}
