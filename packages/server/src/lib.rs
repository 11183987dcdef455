pub mod cli;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;

use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
