//! `ValidatedJson` extractor — deserializes a JSON body and runs the
//! `validator` rules before the handler sees it.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use lettinghub_core::error::AppError;

use crate::error::ApiError;

/// JSON body that has passed `validator` checks.
///
/// Rejects with a 400 payload carrying per-field messages, so handlers
/// only ever receive well-formed requests.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::from(AppError::validation(format!(
                "Malformed request body: {}",
                e.body_text()
            )))
        })?;

        value
            .validate()
            .map_err(|e| ApiError::validation_failed(&e))?;

        Ok(Self(value))
    }
}
