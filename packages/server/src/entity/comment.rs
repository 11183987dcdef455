use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const NAME_MAX_LENGTH: usize = 100;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Only ever assigned from the entry a `CommentForm` was built with.
    pub entry_id: i32,
    #[sea_orm(belongs_to, from = "entry_id", to = "id", on_delete = "Cascade")]
    pub entry: HasOne<super::entry::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

impl Model {
    /// Avatar URL for the commenter, derived from the stored email.
    pub fn gravatar_url(&self) -> String {
        common::gravatar_url(&self.email)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl ActiveModelBehavior for ActiveModel {}
