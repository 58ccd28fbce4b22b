//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use guestbook_core::domain::{NewPost, Post};
use guestbook_core::error::RepoError;
use guestbook_core::ports::PostRepository;

struct MemoryState {
    next_id: i64,
    posts: Vec<Post>,
}

/// In-memory repository: a `Vec` of posts and an id sequence behind one
/// async `RwLock`.
///
/// Writes are serialized by the write lock, reads share the read lock.
/// Ids are never reused, even after a delete.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                posts: Vec::new(),
            }),
        }
    }

    fn sorted<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<Post> {
        let mut posts: Vec<Post> = posts.cloned().collect();
        posts.sort_by(Post::newest_first);
        posts
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let post = post.into_post(id, Utc::now());
        state.posts.push(post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(Self::sorted(state.posts.iter()))
    }

    async fn search(&self, needle: &str) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(Self::sorted(
            state.posts.iter().filter(|p| p.body.contains(needle)),
        ))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepoError> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        Ok((before - state.posts.len()) as u64)
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepoError> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.name != name);
        Ok((before - state.posts.len()) as u64)
    }

    async fn increment_heart(&self, id: i64) -> Result<i64, RepoError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.heart += 1;
        Ok(post.heart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(name: &str, body: &str) -> NewPost {
        NewPost::new(name, body).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.insert(new_post("alice", "one")).await.unwrap();
        let second = repo.insert(new_post("bob", "two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.heart, 0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(new_post("alice", "one")).await.unwrap();

        assert_eq!(repo.delete_by_id(first.id).await.unwrap(), 1);
        let next = repo.insert(new_post("alice", "two")).await.unwrap();

        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive() {
        let repo = InMemoryPostRepository::new();
        repo.insert(new_post("alice", "Hello there")).await.unwrap();

        assert_eq!(repo.search("Hello").await.unwrap().len(), 1);
        assert!(repo.search("hello").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_increment_missing_post() {
        let repo = InMemoryPostRepository::new();
        let result = repo.increment_heart(1).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("alice", "hi")).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }
}
