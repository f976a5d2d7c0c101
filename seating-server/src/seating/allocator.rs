//! Greedy single-pass allocation plan
//!
//! Tables are visited in stored order and share one cursor over the
//! unassigned guests. A party that does not fit the space left at the
//! current table is passed over and never revisited, even if a later table
//! could take it. The plan is best effort, not an optimal packing.

use shared::models::{Guest, Placement};

/// Free seats at one table, as seen when the pass starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTable {
    pub table_id: String,
    pub available: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedyPlan {
    pub placements: Vec<Placement>,
    /// Guests the pass did not place, in input order
    pub left_over: Vec<String>,
}

pub fn plan_greedy(unassigned: &[Guest], tables: &[OpenTable]) -> GreedyPlan {
    let mut plan = GreedyPlan::default();
    let mut placed = vec![false; unassigned.len()];
    let mut cursor = 0;

    for table in tables {
        if cursor >= unassigned.len() {
            break;
        }
        let mut available = table.available;
        while available > 0 && cursor < unassigned.len() {
            let guest = &unassigned[cursor];
            if guest.seats() <= available {
                available -= guest.seats();
                placed[cursor] = true;
                plan.placements.push(Placement {
                    guest_id: guest.id.clone(),
                    table_id: table.table_id.clone(),
                });
            }
            cursor += 1;
        }
    }

    plan.left_over = unassigned
        .iter()
        .zip(placed)
        .filter(|(_, placed)| !placed)
        .map(|(guest, _)| guest.id.clone())
        .collect();
    plan
}
