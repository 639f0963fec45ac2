//! Request extractors that reject with [`AppError`].

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError::BadRequest`].
///
/// The `Content-Type` header is not consulted. Only the first JSON value of the
/// body is decoded and anything after it is ignored. An empty body, a syntax
/// error or a shape mismatch surfaces as a 400 carrying the decoder's message.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Debug + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(rejection = ?rejection, "Rejection");
            AppError::bad_request(rejection.body_text())
        })?;

        let value = decode_first::<T>(&bytes).map_err(|message| {
            tracing::debug!(error = %message, "Rejection");
            AppError::bad_request(message)
        })?;

        tracing::trace!(json = ?value, "Extracted");
        Ok(AppJson(value))
    }
}

/// Decode the first JSON value in `bytes`.
fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("EOF".to_string()),
    }
}
