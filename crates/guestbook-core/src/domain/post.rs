use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a single guestbook entry left by a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub heart: i64,
}

impl Post {
    /// Ordering used by every listing: newest `created_at` first, higher id
    /// first when two posts share a timestamp.
    pub fn newest_first(a: &Post, b: &Post) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// A validated request to create a post.
///
/// The fields are private so a `NewPost` can only come out of [`NewPost::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    name: String,
    body: String,
}

impl NewPost {
    /// Validate a name and body pair. Both are required.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let body = body.into();

        if name.is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        if body.is_empty() {
            return Err(DomainError::Validation("body is required".to_string()));
        }

        Ok(Self { name, body })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Split into `(name, body)`.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.body)
    }

    /// Materialize the post once storage has assigned an id.
    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            name: self.name,
            body: self.body,
            created_at,
            heart: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_post_requires_name() {
        let err = NewPost::new("", "hello").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));
    }

    #[test]
    fn test_new_post_requires_body() {
        let err = NewPost::new("alice", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("body")));
    }

    #[test]
    fn test_into_post_starts_with_zero_hearts() {
        let now = Utc::now();
        let post = NewPost::new("alice", "hello").unwrap().into_post(7, now);

        assert_eq!(post.id, 7);
        assert_eq!(post.name, "alice");
        assert_eq!(post.body, "hello");
        assert_eq!(post.created_at, now);
        assert_eq!(post.heart, 0);
    }

    #[test]
    fn test_newest_first_breaks_ties_by_id() {
        let now = Utc::now();
        let older = NewPost::new("a", "x").unwrap().into_post(1, now - Duration::seconds(5));
        let tied_low = NewPost::new("b", "y").unwrap().into_post(2, now);
        let tied_high = NewPost::new("c", "z").unwrap().into_post(3, now);

        let mut posts = vec![older.clone(), tied_low.clone(), tied_high.clone()];
        posts.sort_by(Post::newest_first);

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_post_serializes_superset_schema() {
        let post = NewPost::new("alice", "hi").unwrap().into_post(1, Utc::now());
        let value = serde_json::to_value(&post).unwrap();

        for field in ["id", "name", "body", "created_at", "heart"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
