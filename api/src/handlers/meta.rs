//! SEO surface: sitemap, robots, RSS

use axum::{extract::State, http::header, response::IntoResponse};

use crate::app::seo::SITE_NAME;
use crate::domain::entities::Page;
use crate::domain::ports::{PostFilter, PostRepository};
use crate::error::AppError;
use crate::AppState;

/// Upper bound on feed/sitemap entries; the blog is nowhere near it
const MAX_FEED_POSTS: i64 = 1_000;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn base_url(state: &AppState) -> String {
    state.config.site_base_url.trim_end_matches('/').to_string()
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let base = base_url(&state);
    let posts = state
        .post_repo
        .find_published(&PostFilter::default(), MAX_FEED_POSTS, 0)
        .await?;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for page in Page::ALL {
        let loc = if page.path().is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, page.path())
        };
        xml.push_str(&format!("  <url><loc>{}</loc></url>\n", escape_xml(&loc)));
    }

    for post in &posts {
        xml.push_str(&format!(
            "  <url><loc>{}/blog/{}</loc><lastmod>{}</lastmod></url>\n",
            base,
            post.slug,
            post.updated_at.format("%Y-%m-%d")
        ));
    }

    xml.push_str("</urlset>\n");
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url(&state)
    );
    ([(header::CONTENT_TYPE, "text/plain")], body)
}

/// GET /rss.xml
pub async fn rss(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let base = base_url(&state);
    let posts = state
        .post_repo
        .find_published(&PostFilter::default(), MAX_FEED_POSTS, 0)
        .await?;

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">\n<channel>\n");
    xml.push_str(&format!("  <title>{} Blog</title>\n", escape_xml(SITE_NAME)));
    xml.push_str(&format!("  <link>{}/blog</link>\n", base));
    xml.push_str(
        "  <description>Notes on design, engineering, and running a studio.</description>\n",
    );

    for post in &posts {
        let link = format!("{}/blog/{}", base, post.slug);
        xml.push_str("  <item>\n");
        xml.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
        xml.push_str(&format!("    <link>{}</link>\n", link));
        xml.push_str(&format!("    <guid>{}</guid>\n", link));
        xml.push_str(&format!(
            "    <pubDate>{}</pubDate>\n",
            post.published_at.to_rfc2822()
        ));
        xml.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&post.excerpt)
        ));
        xml.push_str("  </item>\n");
    }

    xml.push_str("</channel>\n</rss>\n");
    Ok(([(header::CONTENT_TYPE, "application/rss+xml")], xml))
}
