//! Guest Model

use serde::{Deserialize, Serialize};

/// Smallest accepted party size
pub const MIN_PARTY_SIZE: i32 = 1;
/// Largest accepted party size (one invitee plus companions)
pub const MAX_PARTY_SIZE: i32 = 20;

/// Guest entity: one invitation, possibly covering several people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Seats this party occupies
    #[serde(default = "default_party_size")]
    pub party_size: i32,
    /// `None` means the guest is unassigned
    pub table_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Guest {
    /// Party size as counted against a table, never below one seat
    pub fn seats(&self) -> i32 {
        self.party_size.max(MIN_PARTY_SIZE)
    }

    pub fn is_assigned(&self) -> bool {
        self.table_id.is_some()
    }
}

fn default_party_size() -> i32 {
    MIN_PARTY_SIZE
}

/// Create guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestCreate {
    pub name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub party_size: Option<i32>,
    pub table_id: Option<String>,
}

/// Update guest payload
///
/// Empty strings clear `phone_number` / `address`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub party_size: Option<i32>,
}

/// Seat a guest at a table, optionally changing the party size in the same step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestAssign {
    pub table_id: String,
    pub party_size: Option<i32>,
}

/// Public portal answer: where is this guest sitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSeat {
    pub guest_name: String,
    pub party_size: i32,
    pub table_name: Option<String>,
}
