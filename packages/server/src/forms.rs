//! Comment submission form.
//!
//! The form only ever reads `name`, `email` and `body` from submitted data.
//! The entry a comment belongs to is supplied by the caller when the form is
//! constructed, so a forged `entry` field in a POST body has no effect.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use serde::Serialize;
use thiserror::Error;

use crate::entity::{comment, entry};

/// Raw submitted key/value pairs.
pub type FormData = HashMap<String, String>;

/// Field name to the messages explaining why it was rejected.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("form has no bound data")]
    Unbound,

    #[error("form data is invalid")]
    Invalid(FieldErrors),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Construction arguments, assembled by the view for each request.
#[derive(Debug, Default)]
pub struct FormKwargs {
    /// `None` for an empty (unbound) form.
    pub data: Option<FormData>,
    pub entry: Option<entry::Model>,
}

/// Validated field values, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedComment {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// What a template needs to redraw the form.
#[derive(Debug, Serialize)]
pub struct FormContext {
    pub name: String,
    pub email: String,
    pub body: String,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub struct CommentForm {
    data: Option<FormData>,
    entry: entry::Model,
}

impl CommentForm {
    pub const FIELDS: [&'static str; 3] = ["name", "email", "body"];

    /// Fails with `MissingParameter("entry")` when no entry is given.
    pub fn new(kwargs: FormKwargs) -> Result<Self, FormError> {
        let entry = kwargs.entry.ok_or(FormError::MissingParameter("entry"))?;
        Ok(Self {
            data: kwargs.data,
            entry,
        })
    }

    pub fn entry(&self) -> &entry::Model {
        &self.entry
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Raw submitted value for a field, or `""`.
    pub fn value(&self, field: &str) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Validate the bound data.
    pub fn clean(&self) -> Result<CleanedComment, FormError> {
        if !self.is_bound() {
            return Err(FormError::Unbound);
        }

        let mut errors = FieldErrors::new();

        let name = self.required("name", &mut errors);
        if let Some(name) = name {
            check_max_length("name", name, comment::NAME_MAX_LENGTH, &mut errors);
        }

        let email = self.required("email", &mut errors);
        if let Some(email) = email
            && check_max_length("email", email, common::email::MAX_EMAIL_LENGTH, &mut errors)
            && !common::is_valid_email(email)
        {
            push_error(&mut errors, "email", INVALID_EMAIL_MESSAGE.to_string());
        }

        let body = self.required("body", &mut errors);

        match (name, email, body) {
            (Some(name), Some(email), Some(body)) if errors.is_empty() => Ok(CleanedComment {
                name: name.to_string(),
                email: email.to_string(),
                body: body.to_string(),
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.clean().is_ok()
    }

    /// Field errors for bound data. Always empty for an unbound form.
    pub fn errors(&self) -> FieldErrors {
        match self.clean() {
            Err(FormError::Invalid(errors)) => errors,
            _ => FieldErrors::new(),
        }
    }

    pub fn context(&self) -> FormContext {
        FormContext {
            name: self.value("name").to_string(),
            email: self.value("email").to_string(),
            body: self.value("body").to_string(),
            errors: self.errors(),
        }
    }

    /// Validate, attach the constructor entry, then insert.
    pub async fn save<C: ConnectionTrait>(&self, db: &C) -> Result<comment::Model, FormError> {
        let cleaned = self.clean()?;

        let now = Utc::now();
        let mut new_comment = comment::ActiveModel {
            name: Set(cleaned.name),
            email: Set(cleaned.email),
            body: Set(cleaned.body),
            created_at: Set(now),
            modified_at: Set(now),
            ..Default::default()
        };
        new_comment.entry_id = Set(self.entry.id);

        let model = new_comment.insert(db).await?;
        Ok(model)
    }

    fn required(&self, field: &'static str, errors: &mut FieldErrors) -> Option<&str> {
        let value = self.value(field).trim();
        if value.is_empty() {
            push_error(errors, field, REQUIRED_MESSAGE.to_string());
            None
        } else {
            Some(value)
        }
    }
}

/// Returns `true` when the value fits.
fn check_max_length(field: &'static str, value: &str, max: usize, errors: &mut FieldErrors) -> bool {
    let len = value.chars().count();
    if len > max {
        push_error(
            errors,
            field,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        );
        return false;
    }
    true
}

fn push_error(errors: &mut FieldErrors, field: &'static str, message: String) {
    errors.entry(field).or_default().push(message);
}
