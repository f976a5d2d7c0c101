//! Bulk seating handlers

use axum::{Json, body::Bytes, extract::State};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{ArrangeReport, AutoArrangeRequest, AutoAssignReport, CanvasSize};

/// POST /api/seating/auto-assign - greedy pass seating unassigned guests
pub async fn auto_assign(State(state): State<ServerState>) -> AppResult<Json<AutoAssignReport>> {
    Ok(Json(state.seating.bulk_auto_assign().await?))
}

/// POST /api/seating/auto-arrange - lay tables out on a circle
///
/// The body is optional; missing dimensions come from the server config.
pub async fn auto_arrange(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<ArrangeReport>> {
    let request: AutoArrangeRequest = if body.iter().all(u8::is_ascii_whitespace) {
        AutoArrangeRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::invalid_request(format!("Invalid canvas body: {e}")))?
    };
    let canvas = resolve_canvas(&request, state.config.canvas)?;
    Ok(Json(state.seating.auto_arrange_tables(canvas).await?))
}

fn resolve_canvas(request: &AutoArrangeRequest, fallback: CanvasSize) -> AppResult<CanvasSize> {
    let width = request.width.unwrap_or(fallback.width);
    let height = request.height.unwrap_or(fallback.height);
    for (field, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::validation(format!(
                "Canvas {field} must be a positive number"
            )));
        }
    }
    Ok(CanvasSize { width, height })
}
