//! Post store operations on top of a [`PostRepository`].

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Use-case layer for posts.
///
/// Validates input, assigns identity and creation time, merges partial
/// updates and folds every repository failure into [`DomainError`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_newest_first().await?)
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = Post::parse_id(raw_id)?;

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?
            .ok_or(DomainError::NotFound { id })
    }

    /// Validate and persist a new post. Nothing is written on validation failure.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;

        let post = Post::new(input);
        Ok(self.repo.insert(post).await?)
    }

    /// Merge `patch` into the stored post. `id` and `date` are preserved.
    pub async fn update(&self, raw_id: &str, patch: PostPatch) -> Result<Post, DomainError> {
        let id = Post::parse_id(raw_id)?;

        let mut post = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?
            .ok_or(DomainError::NotFound { id })?;

        if patch.is_empty() {
            return Ok(post);
        }

        post.apply(patch)?;

        self.repo
            .update(post)
            .await
            .map_err(|e| DomainError::from_repo(e, id))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), DomainError> {
        let id = Post::parse_id(raw_id)?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))
    }
}
