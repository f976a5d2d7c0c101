//! Data models
//!
//! Shared between the seating server and its clients (via API).
//! All IDs are UUID v4 strings.

pub mod dining_table;
pub mod event_settings;
pub mod guest;
pub mod layout_label;
pub mod layout_shape;
pub mod reference_object;
pub mod seating;

// Re-exports
pub use dining_table::*;
pub use event_settings::*;
pub use guest::*;
pub use layout_label::*;
pub use layout_shape::*;
pub use reference_object::*;
pub use seating::*;
