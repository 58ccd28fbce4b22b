use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - storage for guestbook entries.
///
/// Listing methods return posts ordered by [`Post::newest_first`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post, assigning its id and creation time.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose body contains `needle` (case-sensitive), newest first.
    async fn search(&self, needle: &str) -> Result<Vec<Post>, RepoError>;

    /// Delete a post by id. Returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepoError>;

    /// Delete every post whose name matches exactly. Returns the number removed.
    async fn delete_by_name(&self, name: &str) -> Result<u64, RepoError>;

    /// Add one heart to a post and return the new count.
    ///
    /// Returns [`RepoError::NotFound`] when no post has that id.
    async fn increment_heart(&self, id: i64) -> Result<i64, RepoError>;
}
