//! SeaORM entities for the `profiles` and `posts` tables.

pub mod post;
pub mod profile;
