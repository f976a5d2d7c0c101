//! Guest API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_GUEST_NAME_LEN, MAX_PHONE_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::AppResult;
use shared::models::{Guest, GuestAssign, GuestCreate, GuestUpdate};

#[derive(Debug, Default, Deserialize)]
pub struct GuestQuery {
    pub search: Option<String>,
}

/// GET /api/guests?search= - list guests, optionally filtered by name
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GuestQuery>,
) -> AppResult<Json<Vec<Guest>>> {
    let guests = state.seating.list_guests(query.search.as_deref()).await?;
    Ok(Json(guests))
}

/// GET /api/guests/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.seating.get_guest(&id).await?))
}

/// POST /api/guests - create a guest, optionally seated at a table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validate_required_text(&payload.name, "name", MAX_GUEST_NAME_LEN)?;
    validate_optional_text(&payload.phone_number, "phone_number", MAX_PHONE_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    Ok(Json(state.seating.create_guest(payload).await?))
}

/// PUT /api/guests/:id - edit name, contact details or party size
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GuestUpdate>,
) -> AppResult<Json<Guest>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_GUEST_NAME_LEN)?;
    }
    validate_optional_text(&payload.phone_number, "phone_number", MAX_PHONE_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    Ok(Json(state.seating.update_guest(&id, payload).await?))
}

/// DELETE /api/guests/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.seating.delete_guest(&id).await?;
    Ok(Json(true))
}

/// POST /api/guests/:id/assign - seat at a table, capacity permitting
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GuestAssign>,
) -> AppResult<Json<Guest>> {
    let guest = state
        .seating
        .assign_guest_to_table(&id, &payload.table_id, payload.party_size)
        .await?;
    Ok(Json(guest))
}

/// POST /api/guests/:id/unassign
pub async fn unassign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.seating.unassign_guest(&id).await?))
}
