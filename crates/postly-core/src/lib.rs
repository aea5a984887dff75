//! # Postly Core
//!
//! The domain layer of Postly.
//! This crate contains the publishing logic (slugs, content conversion,
//! statistics, the upsert pipeline) with zero infrastructure dependencies.
//! Storage and auth are reached only through the traits in [`ports`].

pub mod content;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, PublishError, RepoError};
pub use service::{PostService, PublishSettings};
