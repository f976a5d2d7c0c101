//! Guest portal handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::settings::load_settings;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::GuestSeat;

#[derive(Debug, Serialize)]
pub struct EventInfo {
    pub event_name: String,
    pub home_page_text: String,
    pub search_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub event_name: String,
    pub matches: Vec<GuestSeat>,
}

/// GET /api/public/event
pub async fn event(State(state): State<ServerState>) -> AppResult<Json<EventInfo>> {
    let settings = load_settings(&state).await?;
    Ok(Json(EventInfo {
        event_name: settings.event_name,
        home_page_text: settings.home_page_text,
        search_enabled: settings.search_enabled,
    }))
}

/// GET /api/public/lookup?name= - which table is my party at
pub async fn lookup(
    State(state): State<ServerState>,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<LookupResponse>> {
    let settings = load_settings(&state).await?;
    if !settings.search_enabled {
        return Err(AppError::with_message(
            ErrorCode::FeatureDisabled,
            "Guest search is turned off",
        ));
    }

    let matches = state.seating.find_guest_seat(&query.name).await?;
    Ok(Json(LookupResponse {
        event_name: settings.event_name,
        matches,
    }))
}
