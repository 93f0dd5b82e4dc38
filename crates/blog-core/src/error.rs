//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - the single error kind returned by the post store.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    NotFound { id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid post id: {0}")]
    InvalidIdentifier(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Convert a repository failure for the post `id` into a domain error.
    pub fn from_repo(err: RepoError, id: Uuid) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound { id },
            other => other.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                DomainError::StoreUnavailable(msg)
            }
            RepoError::NotFound => DomainError::StoreUnavailable(
                "record vanished during operation".to_string(),
            ),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_not_found_keeps_the_requested_id() {
        let id = Uuid::new_v4();
        match DomainError::from_repo(RepoError::NotFound, id) {
            DomainError::NotFound { id: got } => assert_eq!(got, id),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn query_failures_become_store_unavailable() {
        let err = DomainError::from_repo(RepoError::Query("timeout".into()), Uuid::new_v4());
        assert!(matches!(err, DomainError::StoreUnavailable(msg) if msg == "timeout"));
    }
}
