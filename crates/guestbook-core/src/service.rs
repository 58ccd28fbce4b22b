//! The guestbook store.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::{NewPost, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Guestbook store - validates requests and delegates to a [`PostRepository`].
///
/// Validation happens here, before the repository is touched, so a rejected
/// request never leaves partial state behind.
#[derive(Clone)]
pub struct Guestbook {
    repo: Arc<dyn PostRepository>,
}

impl Guestbook {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post. Both `name` and `body` must be non-empty.
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn add(&self, name: &str, body: &str) -> Result<Post, DomainError> {
        let new_post = NewPost::new(name, body)?;
        let post = self.repo.insert(new_post).await?;

        tracing::info!(post_id = post.id, "Post added");
        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.list().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Posts whose body contains `query`, newest first.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, DomainError> {
        if query.is_empty() {
            return Err(DomainError::Validation(
                "search query is required".to_string(),
            ));
        }

        let posts = self.repo.search(query).await?;
        tracing::debug!(count = posts.len(), "Searched posts");
        Ok(posts)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Delete a post by id. A missing id reports zero, it is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, DomainError> {
        let deleted = self.repo.delete_by_id(id).await?;
        tracing::info!(deleted, "Deleted post by id");
        Ok(deleted)
    }

    /// Delete every post left under `name`.
    #[instrument(skip(self))]
    pub async fn delete_by_name(&self, name: &str) -> Result<u64, DomainError> {
        if name.is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }

        let deleted = self.repo.delete_by_name(name).await?;
        tracing::info!(deleted, "Deleted posts by name");
        Ok(deleted)
    }

    /// Add a heart to a post and return the new count.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: i64) -> Result<i64, DomainError> {
        match self.repo.increment_heart(id).await {
            Ok(heart) => {
                tracing::info!(heart, "Heart added");
                Ok(heart)
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "post",
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
