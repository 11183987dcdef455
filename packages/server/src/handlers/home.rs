use axum::extract::State;
use axum::response::Html;
use tracing::instrument;

use crate::entity::entry;
use crate::error::AppError;
use crate::models::entry::EntryItem;
use crate::state::AppState;
use crate::templates::{self, base_context};
use crate::utils::entry::list_entries;

/// Homepage: every entry, newest first.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries: Vec<EntryItem> = list_entries(&state.db)
        .await?
        .iter()
        .map(|(entry, author)| EntryItem::new(entry, author.as_ref()))
        .collect();

    let mut ctx = base_context(&state.db, &state.config).await?;
    ctx.insert("heading", entry::VERBOSE_NAME_PLURAL);
    ctx.insert("entries", &entries);

    let html = state.templates.render(templates::INDEX, &ctx)?;
    Ok(Html(html))
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
