use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

/// `Query` whose rejection is the JSON `HttpError::BadRequest` body.
pub struct SimpleQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for SimpleQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("⚠️ Rejected query string: {}", rejection.body_text());
                HttpError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(value))
    }
}

/// `Path` whose rejection is the JSON `HttpError::BadRequest` body.
pub struct SimplePath<T>(pub T);

impl<S, T> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("⚠️ Rejected path parameter: {}", rejection.body_text());
                HttpError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(value))
    }
}
