//! HTTP route handlers.
//!
//! The service exposes a single route, the status probe, with an explicit
//! Cache-Control policy. Requests to any other path or with any other method
//! fall through to axum's defaults (404 Not Found / 405 Method Not Allowed).
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_STATUS;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Status probe - never cached, always reflects the live process
    let status_routes = Router::new()
        .route("/status", get(status::status))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATUS),
        ));

    Router::new()
        .merge(status_routes)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
