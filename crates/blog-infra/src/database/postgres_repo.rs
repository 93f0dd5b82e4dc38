//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        err @ (DbErr::ConnectionAcquire(_) | DbErr::Conn(_)) => {
            RepoError::Connection(err.to_string())
        }
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::Date)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Listed posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let id = post.id;
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let id = post.id;
        let model = post::ActiveModel::for_update(post)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %id, "Updated post");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Deleted post");
        Ok(())
    }
}
