//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation failures, naming the field, rather than as malformed JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request to edit a post. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub like: u64,
    /// `content` escaped for HTML with line breaks as `<br>`. Display only.
    pub content_html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_missing_fields_are_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(req.author, "");
        assert_eq!(req.title, "T");
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_update_request_distinguishes_absent_from_blank() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"author": ""}"#).unwrap();
        assert_eq!(req.author.as_deref(), Some(""));
        assert!(req.title.is_none());
    }
}
