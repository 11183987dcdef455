use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Form<T>` wrapper that converts decoding errors into `AppError::Validation`,
/// so malformed bodies get the regular HTML error page.
///
/// A request that is not `application/x-www-form-urlencoded` at all (including
/// one with no body) carries no submitted fields and yields `T::default()`.
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(AppForm(value)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(AppForm(T::default())),
            Err(e) => Err(AppError::Validation(e.body_text())),
        }
    }
}
