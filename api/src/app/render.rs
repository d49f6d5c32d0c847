//! Markdown rendering for blog posts
//!
//! Markdown is parsed with GFM extensions and sanitized before it leaves
//! the server. Code fences keep their `language-*` class so the client can
//! style them; everything else ammonia considers unsafe is stripped.
//! Rendered output is not cached; every read re-parses the source.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Options, Parser};

/// Assumed reading speed for the derived read-time value
const WORDS_PER_MINUTE: usize = 200;

/// Render Markdown to sanitized HTML
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut raw = String::with_capacity(source.len() * 2);
    html::push_html(&mut raw, parser);

    // Keep the language-* class on code blocks; drop every other attribute
    // ammonia would not allow anyway.
    ammonia::Builder::default()
        .add_tag_attributes("code", &["class"])
        .clean(&raw)
        .to_string()
}

/// Estimated minutes to read, never below one
pub fn read_time_minutes(source: &str) -> i32 {
    let words = source.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as i32
}

/// Human-readable publication date, e.g. "March 4, 2026"
pub fn format_display_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}
