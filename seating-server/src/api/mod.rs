//! HTTP API
//!
//! Every resource lives in its own module exposing a `router()`; handlers
//! sit next to it in `handler.rs`.
//!
//! | Prefix | Module |
//! |--------|--------|
//! | /health | [`health`] |
//! | /api/guests | [`guests`] |
//! | /api/tables | [`tables`] |
//! | /api/seating | [`seating`] |
//! | /api/settings | [`settings`] |
//! | /api/layout | [`layout`] |
//! | /api/public | [`public`] |

pub mod guests;
pub mod health;
pub mod layout;
pub mod public;
pub mod seating;
pub mod settings;
pub mod tables;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(guests::router())
        .merge(tables::router())
        .merge(seating::router())
        .merge(settings::router())
        .merge(layout::router())
        .merge(public::router(state))
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process `oneshot` calls in tests
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Request logging; sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // ========== Request id ==========
        // Set wraps propagate so the generated id reaches the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
