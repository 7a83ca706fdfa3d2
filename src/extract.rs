//! Request extractors.
//!
//! `AppJson` replaces axum's stock `Json` extractor for request bodies.
//! The stock extractor answers malformed or incomplete bodies with its own
//! 422/415 responses; this wrapper funnels those rejections through
//! [`AppError`] instead, so a body missing `amount_cents` comes back as a
//! 400 with the standard `{"error":{code,message}}` shape like every other
//! validation failure.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON request body, rejected as a 400 `invalid_request` on bad input.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}
