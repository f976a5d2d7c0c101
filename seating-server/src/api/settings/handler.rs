//! Event settings handlers
//!
//! Settings are a singleton created with defaults on first read.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_PAGE_TEXT_LEN, MAX_TITLE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{EventSettings, EventSettingsUpdate};
use shared::util::now_millis;

/// Current settings, storing the defaults if none exist yet
pub async fn load_settings(state: &ServerState) -> AppResult<EventSettings> {
    let existing = state
        .store
        .get_settings()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    match existing {
        Some(settings) => Ok(settings),
        None => {
            tracing::info!("Creating default event settings");
            state
                .store
                .put_settings(EventSettings::with_defaults(now_millis()))
                .await
                .map_err(|e| AppError::database(e.to_string()))
        }
    }
}

/// GET /api/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<EventSettings>> {
    Ok(Json(load_settings(&state).await?))
}

/// PUT /api/settings - partial update
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<EventSettingsUpdate>,
) -> AppResult<Json<EventSettings>> {
    if let Some(name) = &payload.event_name {
        validate_required_text(name, "event_name", MAX_TITLE_LEN)?;
    }
    validate_optional_text(&payload.home_page_text, "home_page_text", MAX_PAGE_TEXT_LEN)?;

    let current = load_settings(&state).await?;
    if payload.is_empty() {
        return Ok(Json(current));
    }

    let updated = EventSettings {
        event_name: payload
            .event_name
            .map(|n| n.trim().to_string())
            .unwrap_or(current.event_name),
        home_page_text: payload.home_page_text.unwrap_or(current.home_page_text),
        search_enabled: payload.search_enabled.unwrap_or(current.search_enabled),
        updated_at: now_millis(),
    };
    let saved = state
        .store
        .put_settings(updated)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    tracing::info!(search_enabled = saved.search_enabled, "Event settings updated");
    Ok(Json(saved))
}
