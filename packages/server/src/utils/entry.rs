use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::*;

use crate::entity::{comment, entry, user};
use crate::error::AppError;
use crate::models::entry::{EntryKey, EntryLocator};

/// Number of entries shown in the sidebar.
pub const ENTRY_HISTORY_LIMIT: u64 = 5;

/// Look up an entry by ID, returning 404 if not found.
pub async fn find_entry<C: ConnectionTrait>(db: &C, id: i32) -> Result<entry::Model, AppError> {
    entry::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))
}

/// Look up an entry by slug among those created on `date` (UTC).
///
/// Slugs are not unique, so the oldest match wins.
pub async fn find_entry_by_slug<C: ConnectionTrait>(
    db: &C,
    date: NaiveDate,
    slug: &str,
) -> Result<entry::Model, AppError> {
    lookup_slug_on_day(db, date, slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))
}

async fn lookup_slug_on_day<C: ConnectionTrait>(
    db: &C,
    date: NaiveDate,
    slug: &str,
) -> Result<Option<entry::Model>, DbErr> {
    let Some((start, end)) = day_bounds(date) else {
        return Ok(None);
    };

    entry::Entity::find()
        .filter(entry::Column::Slug.eq(slug))
        .filter(entry::Column::CreatedAt.gte(start))
        .filter(entry::Column::CreatedAt.lt(end))
        .order_by_asc(entry::Column::Id)
        .one(db)
        .await
}

/// Resolve a parsed detail path to an entry.
///
/// For `{id}-{slug}` an entry whose id and slug both match wins. Otherwise
/// the whole segment is tried as a slug on the path's date, and finally the
/// id alone, so links made before a title edit keep working.
pub async fn resolve_entry<C: ConnectionTrait>(
    db: &C,
    locator: &EntryLocator,
) -> Result<entry::Model, AppError> {
    match (&locator.key, locator.date) {
        (EntryKey::Id(id), _) => find_entry(db, *id).await,
        (EntryKey::IdSlug { id, slug, segment }, date) => {
            let by_id = entry::Entity::find_by_id(*id).one(db).await?;
            if let Some(entry) = by_id.as_ref().filter(|e| e.slug == *slug) {
                return Ok(entry.clone());
            }
            if let Some(date) = date
                && let Some(entry) = lookup_slug_on_day(db, date, segment).await?
            {
                return Ok(entry);
            }
            by_id.ok_or_else(|| AppError::NotFound("Entry not found".into()))
        }
        (EntryKey::Slug(slug), Some(date)) => find_entry_by_slug(db, date, slug).await,
        (EntryKey::Slug(_), None) => Err(AppError::NotFound("Entry not found".into())),
    }
}

fn day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = date.and_hms_opt(0, 0, 0)?.and_utc();
    let end = date.succ_opt()?.and_hms_opt(0, 0, 0)?.and_utc();
    Some((start, end))
}

/// Every entry with its author, newest first.
pub async fn list_entries<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<(entry::Model, Option<user::Model>)>, DbErr> {
    entry::Entity::find()
        .find_also_related(user::Entity)
        .order_by_desc(entry::Column::CreatedAt)
        .order_by_desc(entry::Column::Id)
        .all(db)
        .await
}

/// Comments on an entry, oldest first.
pub async fn list_comments<C: ConnectionTrait>(
    db: &C,
    entry_id: i32,
) -> Result<Vec<comment::Model>, DbErr> {
    comment::Entity::find()
        .filter(comment::Column::EntryId.eq(entry_id))
        .order_by_asc(comment::Column::CreatedAt)
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await
}

/// The most recently created entries, newest first.
pub async fn entry_history<C: ConnectionTrait>(db: &C) -> Result<Vec<entry::Model>, DbErr> {
    entry::Entity::find()
        .order_by_desc(entry::Column::CreatedAt)
        .order_by_desc(entry::Column::Id)
        .limit(ENTRY_HISTORY_LIMIT)
        .all(db)
        .await
}
