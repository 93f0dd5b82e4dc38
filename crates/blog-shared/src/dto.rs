//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post.
///
/// Fields are optional on the wire so a missing field reaches validation
/// and is reported by name instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreatePostRequest = serde_json::from_value(json!({ "title": "A" })).unwrap();
        assert_eq!(req.title.as_deref(), Some("A"));
        assert!(req.content.is_none());
    }

    #[test]
    fn update_request_omits_absent_fields() {
        let req = UpdatePostRequest {
            title: Some("new".to_string()),
            content: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "title": "new" }));
    }

    #[test]
    fn post_response_has_public_shape() {
        let id = Uuid::new_v4();
        let date = Utc::now();
        let value = serde_json::to_value(PostResponse {
            id,
            title: "A".to_string(),
            content: "B".to_string(),
            date,
        })
        .unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["id"], json!(id.to_string()));
        assert_eq!(obj["title"], json!("A"));
        assert_eq!(obj["content"], json!("B"));
        assert!(obj["date"].is_string());
    }
}
