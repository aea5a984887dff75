//! # Postly Shared
//!
//! Request and response types of the HTTP API.
//! Kept free of domain types so clients can depend on it alone.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
