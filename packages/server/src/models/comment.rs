use serde::Serialize;

use crate::entity::comment;

/// A comment as rendered under an entry.
#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub name: String,
    pub body: String,
    pub created_at: String,
    pub gravatar_url: String,
}

impl From<&comment::Model> for CommentItem {
    fn from(model: &comment::Model) -> Self {
        Self {
            name: model.name.clone(),
            body: model.body.clone(),
            created_at: model.created_at.format("%B %-d, %Y %H:%M").to_string(),
            gravatar_url: model.gravatar_url(),
        }
    }
}
