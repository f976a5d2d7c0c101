//! Floor plan annotation API

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/layout", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/labels",
            get(handler::list_labels).put(handler::replace_labels),
        )
        .route("/labels/{id}", delete(handler::delete_label))
        .route(
            "/shapes",
            get(handler::list_shapes).put(handler::replace_shapes),
        )
        .route("/shapes/{id}", delete(handler::delete_shape))
        .route(
            "/reference-objects",
            get(handler::list_reference_objects).put(handler::replace_reference_objects),
        )
        .route(
            "/reference-objects/{id}",
            delete(handler::delete_reference_object),
        )
}
