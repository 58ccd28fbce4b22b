//! Data Transfer Objects - query parameters and response bodies for the API.
//!
//! Query parameter names match the existing guestbook web and script clients
//! (`user`, `message`, `q`, `id`, `name`).

use serde::{Deserialize, Serialize};

/// Query for `/add`. Missing parameters deserialize as empty strings so the
/// store reports them as validation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPostQuery {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub message: String,
}

/// Query for `/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Query for `/delete` - either an id or, for the legacy mode, a name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Query for `/heart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartQuery {
    pub id: i64,
}

/// Response to a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

/// Response to a heart increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartResponse {
    pub id: i64,
    pub heart: i64,
}
