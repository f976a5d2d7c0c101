//! Shared types for the seating service
//!
//! Models, error codes and the API response envelope used by the server
//! and by anything talking to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
