use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use shared::errors::{HttpError, ServiceError};
use tracing::warn;
use validator::Validate;

/// JSON body extractor that runs `validator` rules before the handler sees
/// the value. Both malformed JSON and rule violations are answered with 400.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("⚠️ Rejected request body: {}", rejection.body_text());
                HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::from(ServiceError::from(errors)))?;

        Ok(Self(value))
    }
}
