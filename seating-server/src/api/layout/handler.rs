//! Floor plan annotation handlers
//!
//! Labels, shapes and reference objects share one contract: `PUT` replaces
//! the whole set with fresh server ids, `DELETE` removes a single item.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_KIND_LEN, MAX_TITLE_LEN, validate_finite, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    LayoutLabel, LayoutLabelInput, LayoutLabelsReplace, LayoutShape, LayoutShapeInput,
    LayoutShapesReplace, ReferenceObject, ReferenceObjectInput, ReferenceObjectsReplace,
};
use shared::util::new_id;

// ========================================================================
// Labels
// ========================================================================

/// GET /api/layout/labels
pub async fn list_labels(State(state): State<ServerState>) -> AppResult<Json<Vec<LayoutLabel>>> {
    let labels = state
        .store
        .list_labels()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(labels))
}

/// PUT /api/layout/labels - replace the whole label set
pub async fn replace_labels(
    State(state): State<ServerState>,
    Json(payload): Json<LayoutLabelsReplace>,
) -> AppResult<Json<Vec<LayoutLabel>>> {
    let labels = payload
        .labels
        .into_iter()
        .map(into_label)
        .collect::<AppResult<Vec<_>>>()?;

    let saved = state
        .store
        .replace_labels(labels)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    tracing::info!(count = saved.len(), "Layout labels replaced");
    Ok(Json(saved))
}

/// DELETE /api/layout/labels/:id
pub async fn delete_label(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state
        .store
        .delete_label(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if !removed {
        return Err(AppError::new(ErrorCode::LabelNotFound).with_detail("id", id));
    }
    Ok(Json(true))
}

fn into_label(input: LayoutLabelInput) -> AppResult<LayoutLabel> {
    validate_required_text(&input.text, "text", MAX_TITLE_LEN)?;
    validate_finite(Some(input.x), "x")?;
    validate_finite(Some(input.y), "y")?;
    validate_finite(Some(input.rotation), "rotation")?;
    if !input.font_size.is_finite() || input.font_size <= 0.0 {
        return Err(AppError::validation("font_size must be a positive number"));
    }

    Ok(LayoutLabel {
        id: new_id(),
        text: input.text.trim().to_string(),
        x: input.x,
        y: input.y,
        font_size: input.font_size,
        rotation: input.rotation,
    })
}

// ========================================================================
// Shapes
// ========================================================================

/// GET /api/layout/shapes
pub async fn list_shapes(State(state): State<ServerState>) -> AppResult<Json<Vec<LayoutShape>>> {
    let shapes = state
        .store
        .list_shapes()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(shapes))
}

/// PUT /api/layout/shapes - replace the whole shape set
pub async fn replace_shapes(
    State(state): State<ServerState>,
    Json(payload): Json<LayoutShapesReplace>,
) -> AppResult<Json<Vec<LayoutShape>>> {
    let shapes = payload
        .shapes
        .into_iter()
        .map(into_shape)
        .collect::<AppResult<Vec<_>>>()?;

    let saved = state
        .store
        .replace_shapes(shapes)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    tracing::info!(count = saved.len(), "Layout shapes replaced");
    Ok(Json(saved))
}

/// DELETE /api/layout/shapes/:id
pub async fn delete_shape(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state
        .store
        .delete_shape(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if !removed {
        return Err(AppError::new(ErrorCode::ShapeNotFound).with_detail("id", id));
    }
    Ok(Json(true))
}

fn into_shape(input: LayoutShapeInput) -> AppResult<LayoutShape> {
    validate_required_text(&input.kind, "type", MAX_KIND_LEN)?;
    validate_required_text(&input.color, "color", MAX_KIND_LEN)?;
    validate_optional_text(&input.label, "label", MAX_TITLE_LEN)?;
    validate_box(input.x, input.y, input.width, input.height, input.rotation)?;

    Ok(LayoutShape {
        id: new_id(),
        kind: input.kind.trim().to_string(),
        x: input.x,
        y: input.y,
        width: input.width,
        height: input.height,
        rotation: input.rotation,
        color: input.color.trim().to_string(),
        label: input
            .label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
    })
}

// ========================================================================
// Reference objects
// ========================================================================

/// GET /api/layout/reference-objects
pub async fn list_reference_objects(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ReferenceObject>>> {
    let objects = state
        .store
        .list_reference_objects()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(objects))
}

/// PUT /api/layout/reference-objects - replace the whole set
pub async fn replace_reference_objects(
    State(state): State<ServerState>,
    Json(payload): Json<ReferenceObjectsReplace>,
) -> AppResult<Json<Vec<ReferenceObject>>> {
    let objects = payload
        .reference_objects
        .into_iter()
        .map(into_reference_object)
        .collect::<AppResult<Vec<_>>>()?;

    let saved = state
        .store
        .replace_reference_objects(objects)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    tracing::info!(count = saved.len(), "Reference objects replaced");
    Ok(Json(saved))
}

/// DELETE /api/layout/reference-objects/:id
pub async fn delete_reference_object(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state
        .store
        .delete_reference_object(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if !removed {
        return Err(AppError::new(ErrorCode::ReferenceObjectNotFound).with_detail("id", id));
    }
    Ok(Json(true))
}

fn into_reference_object(input: ReferenceObjectInput) -> AppResult<ReferenceObject> {
    validate_required_text(&input.kind, "type", MAX_KIND_LEN)?;
    validate_box(input.x, input.y, input.width, input.height, input.rotation)?;

    Ok(ReferenceObject {
        id: new_id(),
        kind: input.kind.trim().to_string(),
        x: input.x,
        y: input.y,
        width: input.width,
        height: input.height,
        rotation: input.rotation,
    })
}

/// Position must be finite; width and height must be positive
fn validate_box(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> AppResult<()> {
    validate_finite(Some(x), "x")?;
    validate_finite(Some(y), "y")?;
    validate_finite(Some(rotation), "rotation")?;
    for (value, field) in [(width, "width"), (height, "height")] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::validation(format!(
                "{field} must be a positive number"
            )));
        }
    }
    Ok(())
}
