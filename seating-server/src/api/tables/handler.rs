//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::validation::{MAX_TABLE_NAME_LEN, validate_finite, validate_required_text};
use crate::utils::AppResult;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableRename, DiningTableUpdate, SeatingOverview,
    TableWithGuests,
};

#[derive(Debug, Serialize)]
pub struct TableDeleted {
    pub id: String,
    /// Guests moved back to the unassigned list
    pub unseated: u64,
}

/// GET /api/tables - every table with its guests, plus unassigned guests
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<SeatingOverview>> {
    Ok(Json(state.seating.seating_overview().await?))
}

/// GET /api/tables/:id - one table with its guests
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableWithGuests>> {
    Ok(Json(state.seating.get_table_with_guests(&id).await?))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    if !payload.name.trim().is_empty() {
        validate_required_text(&payload.name, "name", MAX_TABLE_NAME_LEN)?;
    }
    validate_finite(payload.position_x, "position_x")?;
    validate_finite(payload.position_y, "position_y")?;
    validate_finite(payload.rotation, "rotation")?;

    Ok(Json(state.seating.create_table(payload).await?))
}

/// PUT /api/tables/:id - edit name, shape, capacity or layout
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(name) = payload.name.as_deref().filter(|n| !n.trim().is_empty()) {
        validate_required_text(name, "name", MAX_TABLE_NAME_LEN)?;
    }
    validate_finite(payload.position_x, "position_x")?;
    validate_finite(payload.position_y, "position_y")?;
    validate_finite(payload.rotation, "rotation")?;

    Ok(Json(state.seating.update_table(&id, payload).await?))
}

/// PUT /api/tables/:id/name
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableRename>,
) -> AppResult<Json<DiningTable>> {
    if !payload.name.trim().is_empty() {
        validate_required_text(&payload.name, "name", MAX_TABLE_NAME_LEN)?;
    }
    Ok(Json(state.seating.rename_table(&id, &payload.name).await?))
}

/// DELETE /api/tables/:id - guests at the table become unassigned
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableDeleted>> {
    let unseated = state.seating.delete_table(&id).await?;
    Ok(Json(TableDeleted { id, unseated }))
}
