// src/presentation/http/controllers/feed.rs
use crate::application::dto::FeedDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

pub async fn rss(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let feed = state.services.article_queries.feed().await.into_http()?;
    let xml = render_rss(&feed);
    Ok(([(CONTENT_TYPE, "application/rss+xml; charset=utf-8")], xml).into_response())
}

/// RSS 2.0 serialization. The item set is small and the shape fixed, so
/// the document is assembled directly rather than through an XML crate.
fn render_rss(feed: &FeedDto) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\">\n<channel>\n");
    push_element(&mut out, "title", &feed.title);
    push_element(&mut out, "link", &feed.link);
    push_element(&mut out, "description", &feed.description);

    for item in &feed.items {
        out.push_str("<item>\n");
        push_element(&mut out, "title", &item.title);
        push_element(&mut out, "link", &item.link);
        push_element(&mut out, "guid", &item.link);
        push_element(&mut out, "pubDate", &item.published_at.to_rfc2822());
        push_element(&mut out, "author", &feed.author);
        push_element(&mut out, "description", &item.description);
        for category in &item.categories {
            push_element(&mut out, "category", category);
        }
        out.push_str("</item>\n");
    }

    out.push_str("</channel>\n</rss>\n");
    out
}

fn push_element(out: &mut String, name: &str, text: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&escape_xml(text));
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
