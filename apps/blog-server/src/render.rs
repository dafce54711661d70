//! Render-time presentation of posts. Nothing here is ever written back.

use blog_core::domain::Post;
use blog_shared::dto::PostResponse;

/// Escape `content` for HTML and turn its line breaks into `<br>`.
pub fn content_to_html(content: &str) -> String {
    html_escape::encode_text(content)
        .lines()
        .collect::<Vec<_>>()
        .join("<br>")
}

/// API view of a stored post.
pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
        like: post.like,
        content_html: content_to_html(&post.content),
    }
}
