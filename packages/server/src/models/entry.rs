use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{entry, user};
use crate::error::AppError;

/// Raw path segments of `/{year}/{month}/{day}/{key}/`.
#[derive(Debug, Deserialize)]
pub struct EntryPath {
    pub year: String,
    pub month: String,
    pub day: String,
    pub key: String,
}

/// How the last path segment identifies an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    /// `{id}` or `{id}-`.
    Id(i32),
    /// `{id}-{slug}`. The whole `segment` may also be a bare slug that
    /// happens to start with digits, such as `2014-recap`.
    IdSlug {
        id: i32,
        slug: String,
        segment: String,
    },
    /// A bare slug, looked up among entries created on the path's date.
    Slug(String),
}

/// A parsed and checked detail-page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocator {
    pub date: Option<NaiveDate>,
    pub key: EntryKey,
}

impl EntryPath {
    /// Every malformed path is reported as not found.
    pub fn parse(&self) -> Result<EntryLocator, AppError> {
        let not_found = || AppError::NotFound("Entry not found".into());

        if !is_digits(&self.year, 4, 4)
            || !is_digits(&self.month, 1, 2)
            || !is_digits(&self.day, 1, 2)
        {
            return Err(not_found());
        }

        let key = parse_key(&self.key).ok_or_else(not_found)?;

        // Date parts are validated above; they only matter for slug lookups.
        let date = match (
            self.year.parse::<i32>(),
            self.month.parse::<u32>(),
            self.day.parse::<u32>(),
        ) {
            (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        };

        if matches!(key, EntryKey::Slug(_)) && date.is_none() {
            return Err(not_found());
        }

        Ok(EntryLocator { date, key })
    }
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_slug_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn parse_key(segment: &str) -> Option<EntryKey> {
    if segment.is_empty() || !segment.chars().all(is_slug_char) {
        return None;
    }

    let (head, rest) = segment.split_once('-').unwrap_or((segment, ""));
    if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return Some(EntryKey::Slug(segment.to_string()));
    }

    match (head.parse::<i32>(), rest.is_empty()) {
        (Ok(id), true) => Some(EntryKey::Id(id)),
        (Ok(id), false) => Some(EntryKey::IdSlug {
            id,
            slug: rest.to_string(),
            segment: segment.to_string(),
        }),
        // An id too large for the column cannot match any row.
        (Err(_), true) => None,
        (Err(_), false) => Some(EntryKey::Slug(segment.to_string())),
    }
}

/// An entry as shown on the homepage and the detail page.
#[derive(Debug, Serialize)]
pub struct EntryItem {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: String,
    pub url: String,
}

impl EntryItem {
    pub fn new(model: &entry::Model, author: Option<&user::Model>) -> Self {
        Self {
            id: model.id,
            title: model.title.clone(),
            body: model.body.clone(),
            author: author.map(|u| u.username.clone()).unwrap_or_default(),
            created_at: format_date(model),
            url: model.get_absolute_url(),
        }
    }
}

/// Sidebar link to a recent entry.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub title: String,
    pub url: String,
}

impl From<&entry::Model> for HistoryItem {
    fn from(model: &entry::Model) -> Self {
        Self {
            title: model.title.clone(),
            url: model.get_absolute_url(),
        }
    }
}

fn format_date(model: &entry::Model) -> String {
    model.created_at.format("%B %-d, %Y").to_string()
}
