use std::fmt;

use chrono::Datelike;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Longest title accepted, in characters.
pub const TITLE_MAX_LENGTH: usize = 500;

/// Plural label used in page headings.
pub const VERBOSE_NAME_PLURAL: &str = "entries";

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub title: String,

    pub author_id: i32,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: HasOne<super::user::Entity>,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    /// Set once on insert.
    pub created_at: DateTimeUtc,
    /// Touched on every save.
    pub modified_at: DateTimeUtc,

    /// Re-derived from `title` on every save. Not unique.
    pub slug: String,

    #[sea_orm(has_many)]
    pub comments: HasMany<super::comment::Entity>,
}

impl Model {
    /// Canonical detail-page path: `/{year}/{month}/{day}/{id}-{slug}/`.
    ///
    /// Date parts come from the UTC creation time and are not zero-padded.
    pub fn get_absolute_url(&self) -> String {
        let date = self.created_at.date_naive();
        format!(
            "/{}/{}/{}/{}-{}/",
            date.year(),
            date.month(),
            date.day(),
            self.id,
            self.slug
        )
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl ActiveModelBehavior for ActiveModel {}
