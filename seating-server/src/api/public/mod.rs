//! Guest portal API (no admin access)
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/public/event | GET | event name and welcome text |
//! | /api/public/lookup?name= | GET | find a party's table (rate limited) |

mod handler;

use axum::{Router, middleware, routing::get};

use crate::core::ServerState;
use crate::middleware::lookup_rate_limit;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/public", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let lookup = Router::new()
        .route("/lookup", get(handler::lookup))
        .route_layer(middleware::from_fn_with_state(state.clone(), lookup_rate_limit));

    Router::new()
        .route("/event", get(handler::event))
        .merge(lookup)
}
