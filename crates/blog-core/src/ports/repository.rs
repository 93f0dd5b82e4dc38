use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Persistence port for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite the title and content of an existing post.
    ///
    /// Returns `RepoError::NotFound` if no row matches `post.id`.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by its ID.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
