//! Seating domain
//!
//! - [`capacity`]: seat accounting for one table
//! - [`engine`]: assignment, table/guest lifecycle and bulk operations
//! - [`allocator`]: the greedy auto-assign plan
//! - [`layout`]: circle auto-arrangement
//! - [`locks`]: keyed async locks serializing read-check-write

pub mod allocator;
pub mod capacity;
pub mod engine;
pub mod error;
pub mod layout;
pub mod locks;

pub use engine::SeatingEngine;
pub use error::{CapacityShortfall, SeatingError, SeatingResult};
