//! Routers for the two demos plus shared health routes.

mod api;
mod basic;
mod common;

pub use api::api_routes;
pub use basic::basic_routes;
pub use common::{common_routes, common_routes_with_ready};

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

fn with_layers(router: Router) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
