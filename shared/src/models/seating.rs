//! Seating views and bulk operation reports

use serde::{Deserialize, Serialize};

use super::{DiningTable, Guest};

/// A table together with the parties seated at it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableWithGuests {
    #[serde(flatten)]
    pub table: DiningTable,
    pub guests: Vec<Guest>,
    pub seats_used: i32,
    pub seats_available: i32,
    pub is_full: bool,
}

/// Whole seating chart: every table plus the guests still waiting for a seat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingOverview {
    pub tables: Vec<TableWithGuests>,
    pub unassigned: Vec<Guest>,
}

/// One committed placement from a bulk pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub guest_id: String,
    pub table_id: String,
}

/// Outcome of a greedy auto-assignment pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoAssignReport {
    /// Placements that were committed
    pub assigned: Vec<Placement>,
    /// Guests the pass could not fit
    pub unassigned: Vec<String>,
    /// Guests seated elsewhere between planning and commit; left where they are
    pub already_seated: Vec<String>,
    /// Planned placements whose commit failed
    pub failed: Vec<Placement>,
}

/// Canvas dimensions used by auto-arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Optional canvas override for an auto-arrange request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoArrangeRequest {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Outcome of an auto-arrangement pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrangeReport {
    pub moved: Vec<String>,
    pub failed: Vec<String>,
}
