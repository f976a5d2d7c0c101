//! In-process store
//!
//! Records live in insertion-ordered vectors behind `parking_lot` locks.
//! Locks are never held across an `.await`.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{
    DiningTable, EventSettings, Guest, LayoutLabel, LayoutShape, ReferenceObject,
};

use super::{GuestPatch, RepoError, RepoResult, SeatingStore, TablePatch};

#[derive(Debug, Default)]
struct Records {
    guests: Vec<Guest>,
    tables: Vec<DiningTable>,
    settings: Option<EventSettings>,
    labels: Vec<LayoutLabel>,
    shapes: Vec<LayoutShape>,
    reference_objects: Vec<ReferenceObject>,
}

/// Vector-backed [`SeatingStore`]; cloning shares the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Records>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeatingStore for MemoryStore {
    async fn get_guest(&self, id: &str) -> RepoResult<Option<Guest>> {
        let records = self.inner.read();
        Ok(records.guests.iter().find(|g| g.id == id).cloned())
    }

    async fn list_guests(&self) -> RepoResult<Vec<Guest>> {
        Ok(self.inner.read().guests.clone())
    }

    async fn list_guests_by_table(&self, table_id: &str) -> RepoResult<Vec<Guest>> {
        let records = self.inner.read();
        Ok(records
            .guests
            .iter()
            .filter(|g| g.table_id.as_deref() == Some(table_id))
            .cloned()
            .collect())
    }

    async fn insert_guest(&self, guest: Guest) -> RepoResult<Guest> {
        let mut records = self.inner.write();
        if records.guests.iter().any(|g| g.id == guest.id) {
            return Err(RepoError::Duplicate(format!("Guest {}", guest.id)));
        }
        records.guests.push(guest.clone());
        Ok(guest)
    }

    async fn update_guest(&self, id: &str, patch: GuestPatch) -> RepoResult<Guest> {
        let mut records = self.inner.write();
        let guest = records
            .guests
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Guest {}", id)))?;
        patch.apply(guest);
        Ok(guest.clone())
    }

    async fn delete_guest(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.inner.write();
        let before = records.guests.len();
        records.guests.retain(|g| g.id != id);
        Ok(records.guests.len() != before)
    }

    async fn unassign_guests_at(&self, table_id: &str, now: i64) -> RepoResult<u64> {
        let mut records = self.inner.write();
        let mut changed = 0;
        for guest in records
            .guests
            .iter_mut()
            .filter(|g| g.table_id.as_deref() == Some(table_id))
        {
            guest.table_id = None;
            guest.updated_at = now;
            changed += 1;
        }
        Ok(changed)
    }

    async fn get_table(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let records = self.inner.read();
        Ok(records.tables.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tables(&self) -> RepoResult<Vec<DiningTable>> {
        Ok(self.inner.read().tables.clone())
    }

    async fn insert_table(&self, table: DiningTable) -> RepoResult<DiningTable> {
        let mut records = self.inner.write();
        if records.tables.iter().any(|t| t.id == table.id) {
            return Err(RepoError::Duplicate(format!("Table {}", table.id)));
        }
        records.tables.push(table.clone());
        Ok(table)
    }

    async fn update_table(&self, id: &str, patch: TablePatch) -> RepoResult<DiningTable> {
        let mut records = self.inner.write();
        let table = records
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Table {}", id)))?;
        patch.apply(table);
        Ok(table.clone())
    }

    async fn delete_table(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.inner.write();
        let before = records.tables.len();
        records.tables.retain(|t| t.id != id);
        Ok(records.tables.len() != before)
    }

    async fn get_settings(&self) -> RepoResult<Option<EventSettings>> {
        Ok(self.inner.read().settings.clone())
    }

    async fn put_settings(&self, settings: EventSettings) -> RepoResult<EventSettings> {
        self.inner.write().settings = Some(settings.clone());
        Ok(settings)
    }

    async fn list_labels(&self) -> RepoResult<Vec<LayoutLabel>> {
        Ok(self.inner.read().labels.clone())
    }

    async fn replace_labels(&self, labels: Vec<LayoutLabel>) -> RepoResult<Vec<LayoutLabel>> {
        self.inner.write().labels = labels.clone();
        Ok(labels)
    }

    async fn delete_label(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.inner.write();
        let before = records.labels.len();
        records.labels.retain(|l| l.id != id);
        Ok(records.labels.len() != before)
    }

    async fn list_shapes(&self) -> RepoResult<Vec<LayoutShape>> {
        Ok(self.inner.read().shapes.clone())
    }

    async fn replace_shapes(&self, shapes: Vec<LayoutShape>) -> RepoResult<Vec<LayoutShape>> {
        self.inner.write().shapes = shapes.clone();
        Ok(shapes)
    }

    async fn delete_shape(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.inner.write();
        let before = records.shapes.len();
        records.shapes.retain(|s| s.id != id);
        Ok(records.shapes.len() != before)
    }

    async fn list_reference_objects(&self) -> RepoResult<Vec<ReferenceObject>> {
        Ok(self.inner.read().reference_objects.clone())
    }

    async fn replace_reference_objects(
        &self,
        objects: Vec<ReferenceObject>,
    ) -> RepoResult<Vec<ReferenceObject>> {
        self.inner.write().reference_objects = objects.clone();
        Ok(objects)
    }

    async fn delete_reference_object(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.inner.write();
        let before = records.reference_objects.len();
        records.reference_objects.retain(|o| o.id != id);
        Ok(records.reference_objects.len() != before)
    }
}
