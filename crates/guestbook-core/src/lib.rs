//! # Guestbook Core
//!
//! The domain layer of the guestbook service.
//! This crate holds the `Post` entity, the repository port and the
//! [`Guestbook`] store, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::Guestbook;
