//! In-memory post repository - used when the `postgres` feature is off, and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Posts kept in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.posts.read().await.iter().rev().cloned().collect();
        // Stable sort: posts sharing a timestamp stay latest-inserted first.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Query(format!("duplicate post id {}", post.id)));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;

        stored.title = post.title;
        stored.content = post.content;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }
}
