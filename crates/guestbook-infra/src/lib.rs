//! # Guestbook Infrastructure
//!
//! Concrete implementations of the [`PostRepository`](guestbook_core::ports::PostRepository)
//! port defined in `guestbook-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `sqlite` - SQLite storage via SeaORM

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod database;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use database::{DatabaseConfig, SqliteDatabase, SqlitePostRepository};
