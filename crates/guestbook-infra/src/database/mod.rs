//! SQLite storage via SeaORM.

mod connections;
pub mod entity;
mod sqlite_repo;

pub use connections::{DatabaseConfig, SqliteDatabase};
pub use sqlite_repo::SqlitePostRepository;
