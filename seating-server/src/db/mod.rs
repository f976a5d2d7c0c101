//! Store Module
//!
//! Record-level access to guests, tables, event settings and the floor plan
//! annotations (labels, shapes, reference objects).
//! Every method is individually atomic; composing several calls into one
//! consistent step is the seating engine's job (see `seating::locks`).

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::models::{
    DiningTable, EventSettings, Guest, LayoutLabel, LayoutShape, ReferenceObject, TableShape,
};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for store operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Partial update of a guest record. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub party_size: Option<i32>,
    pub table_id: Option<Option<String>>,
    pub updated_at: Option<i64>,
}

impl GuestPatch {
    pub fn apply(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name;
        }
        if let Some(phone_number) = self.phone_number {
            guest.phone_number = phone_number;
        }
        if let Some(address) = self.address {
            guest.address = address;
        }
        if let Some(party_size) = self.party_size {
            guest.party_size = party_size;
        }
        if let Some(table_id) = self.table_id {
            guest.table_id = table_id;
        }
        if let Some(updated_at) = self.updated_at {
            guest.updated_at = updated_at;
        }
    }
}

/// Partial update of a table record. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub capacity: Option<i32>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub rotation: Option<f64>,
}

impl TablePatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position_x: Some(x),
            position_y: Some(y),
            ..Default::default()
        }
    }

    pub fn apply(self, table: &mut DiningTable) {
        if let Some(name) = self.name {
            table.name = name;
        }
        if let Some(shape) = self.shape {
            table.shape = shape;
        }
        if let Some(capacity) = self.capacity {
            table.capacity = capacity;
        }
        if let Some(x) = self.position_x {
            table.position_x = x;
        }
        if let Some(y) = self.position_y {
            table.position_y = y;
        }
        if let Some(rotation) = self.rotation {
            table.rotation = rotation;
        }
    }
}

/// Persistence seam for the seating service.
///
/// List methods return records in the order they were stored; the greedy
/// allocator depends on that order being stable.
#[async_trait]
pub trait SeatingStore: Send + Sync {
    // ── Guests ──────────────────────────────────────────────────────
    async fn get_guest(&self, id: &str) -> RepoResult<Option<Guest>>;
    async fn list_guests(&self) -> RepoResult<Vec<Guest>>;
    async fn list_guests_by_table(&self, table_id: &str) -> RepoResult<Vec<Guest>>;
    async fn insert_guest(&self, guest: Guest) -> RepoResult<Guest>;
    /// Fails with [`RepoError::NotFound`] when the guest does not exist.
    async fn update_guest(&self, id: &str, patch: GuestPatch) -> RepoResult<Guest>;
    async fn delete_guest(&self, id: &str) -> RepoResult<bool>;
    /// Clear `table_id` on every guest seated at `table_id`; returns how many changed.
    async fn unassign_guests_at(&self, table_id: &str, now: i64) -> RepoResult<u64>;

    // ── Tables ──────────────────────────────────────────────────────
    async fn get_table(&self, id: &str) -> RepoResult<Option<DiningTable>>;
    async fn list_tables(&self) -> RepoResult<Vec<DiningTable>>;
    async fn insert_table(&self, table: DiningTable) -> RepoResult<DiningTable>;
    /// Fails with [`RepoError::NotFound`] when the table does not exist.
    async fn update_table(&self, id: &str, patch: TablePatch) -> RepoResult<DiningTable>;
    async fn delete_table(&self, id: &str) -> RepoResult<bool>;

    // ── Event settings ──────────────────────────────────────────────
    async fn get_settings(&self) -> RepoResult<Option<EventSettings>>;
    async fn put_settings(&self, settings: EventSettings) -> RepoResult<EventSettings>;

    // ── Layout labels ───────────────────────────────────────────────
    async fn list_labels(&self) -> RepoResult<Vec<LayoutLabel>>;
    async fn replace_labels(&self, labels: Vec<LayoutLabel>) -> RepoResult<Vec<LayoutLabel>>;
    async fn delete_label(&self, id: &str) -> RepoResult<bool>;

    // ── Layout shapes ───────────────────────────────────────────────
    async fn list_shapes(&self) -> RepoResult<Vec<LayoutShape>>;
    async fn replace_shapes(&self, shapes: Vec<LayoutShape>) -> RepoResult<Vec<LayoutShape>>;
    async fn delete_shape(&self, id: &str) -> RepoResult<bool>;

    // ── Reference objects ───────────────────────────────────────────
    async fn list_reference_objects(&self) -> RepoResult<Vec<ReferenceObject>>;
    async fn replace_reference_objects(
        &self,
        objects: Vec<ReferenceObject>,
    ) -> RepoResult<Vec<ReferenceObject>>;
    async fn delete_reference_object(&self, id: &str) -> RepoResult<bool>;
}
