//! Creating and editing users and entries.
//!
//! None of this is routed over HTTP; the CLI and the tests drive it.

use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{entry, user};
use crate::error::AppError;
use crate::models::shared::{validate_title, validate_username};

#[instrument(skip(db))]
pub async fn create_user<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
) -> Result<user::Model, AppError> {
    validate_username(username)?;
    let email = email.trim();
    if !email.is_empty() && !common::is_valid_email(email) {
        return Err(AppError::Validation("Enter a valid email address.".into()));
    }

    let new_user = user::ActiveModel {
        username: Set(username.trim().to_string()),
        email: Set(email.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let user = new_user.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("Username '{}' is already taken", username.trim()))
        }
        _ => AppError::from(e),
    })?;

    info!(user_id = user.id, "Created user");
    Ok(user)
}

pub async fn find_user_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<user::Model, AppError> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username.trim()))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username.trim())))
}

/// Insert a new entry. The slug is derived from the title.
#[instrument(skip(db, body))]
pub async fn create_entry<C: ConnectionTrait>(
    db: &C,
    author_id: i32,
    title: &str,
    body: &str,
) -> Result<entry::Model, AppError> {
    validate_title(title)?;

    user::Entity::find_by_id(author_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".into()))?;

    let title = title.trim().to_string();
    let now = Utc::now();
    let new_entry = entry::ActiveModel {
        slug: Set(common::slugify(&title)),
        title: Set(title),
        author_id: Set(author_id),
        body: Set(body.to_string()),
        created_at: Set(now),
        modified_at: Set(now),
        ..Default::default()
    };

    let model = new_entry.insert(db).await?;
    info!(entry_id = model.id, slug = %model.slug, "Created entry");
    Ok(model)
}

/// Replace an entry's title and body, re-deriving the slug and touching
/// `modified_at`. `created_at` is left alone.
#[instrument(skip(db, body))]
pub async fn update_entry<C: ConnectionTrait>(
    db: &C,
    id: i32,
    title: &str,
    body: &str,
) -> Result<entry::Model, AppError> {
    validate_title(title)?;

    let existing = entry::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))?;

    let modified_at = Ord::max(Utc::now(), existing.created_at);
    let title = title.trim().to_string();

    let mut active: entry::ActiveModel = existing.into();
    active.slug = Set(common::slugify(&title));
    active.title = Set(title);
    active.body = Set(body.to_string());
    active.modified_at = Set(modified_at);

    let model = active.update(db).await?;
    info!(entry_id = model.id, "Updated entry");
    Ok(model)
}
