//! HTTP route handlers and router configuration

mod admin;
mod data;
mod view;

pub use data::{DataParams, DataResponse};
pub use view::{AckResponse, OrderBody, SelectionsBody};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/data", get(data::list))
        .route(
            "/selections",
            get(view::get_selections).post(view::set_selections),
        )
        .route(
            "/sort-order",
            get(view::get_sort_order).post(view::set_sort_order),
        );

    let mut router = Router::new()
        .route("/health", get(admin::health))
        .nest("/api", api)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
