//! Router wiring: API routes, operational routes, docs, and middleware.

pub mod api;
pub mod common;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use api::api_routes;
pub use common::common_routes;

/// The complete application: API + operational routes, permissive CORS,
/// request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
