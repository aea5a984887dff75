//! Domain entities - the core business objects.

mod user;

mod post;
mod theme;

pub use post::Post;
pub use theme::{Theme, UnknownTheme};
pub use user::{CurrentUser, User};
