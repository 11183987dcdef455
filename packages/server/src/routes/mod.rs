use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route(
            "/{year}/{month}/{day}/{key}/",
            get(handlers::entry::entry_detail).post(handlers::entry::post_comment),
        )
        .fallback(handlers::home::not_found)
}
