//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod confirmation;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use confirmation::{Confirmation, Preconfirmed};
pub use repository::{BaseRepository, PostRepository, UserRepository};
