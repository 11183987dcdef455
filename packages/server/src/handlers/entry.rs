use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::{debug, info, instrument};

use crate::entity::{entry, user};
use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::forms::{CommentForm, FormData, FormError, FormKwargs};
use crate::models::comment::CommentItem;
use crate::models::entry::{EntryItem, EntryPath};
use crate::state::AppState;
use crate::templates::{self, base_context};
use crate::utils::entry::{list_comments, resolve_entry};

/// Entry detail page with its comments and the comment form.
///
/// The entry is resolved once in [`EntryDetail::dispatch`] and reused for the
/// form arguments, the template context and the redirect target.
pub struct EntryDetail {
    entry: entry::Model,
}

impl EntryDetail {
    pub async fn dispatch<C: ConnectionTrait>(db: &C, path: &EntryPath) -> Result<Self, AppError> {
        let locator = path.parse()?;
        let entry = resolve_entry(db, &locator).await?;
        Ok(Self { entry })
    }

    pub fn entry(&self) -> &entry::Model {
        &self.entry
    }

    pub fn form_kwargs(&self, data: Option<FormData>) -> FormKwargs {
        FormKwargs {
            data,
            entry: Some(self.entry.clone()),
        }
    }

    pub fn success_url(&self) -> String {
        self.entry.get_absolute_url()
    }

    pub async fn render(&self, state: &AppState, form: &CommentForm) -> Result<Html<String>, AppError> {
        let author = user::Entity::find_by_id(self.entry.author_id)
            .one(&state.db)
            .await?;
        let comments: Vec<CommentItem> = list_comments(&state.db, self.entry.id)
            .await?
            .iter()
            .map(CommentItem::from)
            .collect();

        let mut ctx = base_context(&state.db, &state.config).await?;
        ctx.insert("entry", &EntryItem::new(&self.entry, author.as_ref()));
        ctx.insert("comments", &comments);
        ctx.insert("form", &form.context());

        let html = state.templates.render(templates::ENTRY_DETAIL, &ctx)?;
        Ok(Html(html))
    }
}

#[instrument(skip(state))]
pub async fn entry_detail(
    State(state): State<AppState>,
    Path(path): Path<EntryPath>,
) -> Result<Html<String>, AppError> {
    let view = EntryDetail::dispatch(&state.db, &path).await?;
    let form = CommentForm::new(view.form_kwargs(None))?;
    view.render(&state, &form).await
}

/// Valid data: store the comment and answer `302 Found` back to the entry.
/// Invalid data: re-render the page with field errors and `200 OK`.
///
/// The entry is resolved before the body is looked at, so a missing entry is
/// always a 404.
#[instrument(skip(state, body))]
pub async fn post_comment(
    State(state): State<AppState>,
    Path(path): Path<EntryPath>,
    body: Result<AppForm<FormData>, AppError>,
) -> Result<Response, AppError> {
    let view = EntryDetail::dispatch(&state.db, &path).await?;
    let AppForm(data) = body?;
    let form = CommentForm::new(view.form_kwargs(Some(data)))?;

    match form.save(&state.db).await {
        Ok(comment) => {
            info!(entry_id = view.entry().id, comment_id = comment.id, "Comment posted");
            Ok((StatusCode::FOUND, [(header::LOCATION, view.success_url())]).into_response())
        }
        Err(FormError::Invalid(errors)) => {
            debug!(?errors, "Comment rejected");
            Ok(view.render(&state, &form).await?.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
