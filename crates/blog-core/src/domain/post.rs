use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Creation time. Set once and never touched by updates.
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post from validated input with a fresh id and the current time.
    pub fn new(input: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            date: Utc::now(),
        }
    }

    /// Parse a raw path segment into a post id.
    pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(raw).map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))
    }

    /// Merge the supplied fields into this post and re-check its invariants.
    pub fn apply(&mut self, patch: PostPatch) -> Result<(), DomainError> {
        patch.validate()?;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }

        require_fields(&[("title", self.title.as_str()), ("content", self.content.as_str())])
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields must be present and non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_fields(&[("title", self.title.as_str()), ("content", self.content.as_str())])
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Supplied fields may not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let supplied: Vec<(&'static str, &str)> =
            [("title", &self.title), ("content", &self.content)]
                .into_iter()
                .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
                .collect();

        require_fields(&supplied)
    }
}

fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), DomainError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [field] => Err(DomainError::Validation(format!("{field} is required"))),
        fields => Err(DomainError::Validation(format!(
            "{} are required",
            fields.join(" and ")
        ))),
    }
}
