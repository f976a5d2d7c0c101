//! Bulk seating API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/seating", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/auto-assign", post(handler::auto_assign))
        .route("/auto-arrange", post(handler::auto_arrange))
}
