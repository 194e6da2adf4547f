//! Request body extraction for the note handlers.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that reads as `T::default()` when the request has none.
///
/// A request without a `Content-Type`, or with `Content-Length: 0`, is treated
/// as an empty object, so field validation (or a no-op update) decides the
/// outcome. A body that is sent as JSON but does not parse into `T` is
/// rejected as `INVALID_JSON`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_bodyless(&req) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

fn is_bodyless(req: &Request) -> bool {
    let headers = req.headers();
    let empty_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        == Some(0);

    !headers.contains_key(CONTENT_TYPE) || empty_length
}
