//! API handlers for the Biblioteca REST endpoints

pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// Response body for successful creates
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned to the new row
    pub id: i32,
}

/// Response body for successful updates and deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// JSON body extractor that rejects any non-JSON request uniformly
///
/// Wraps [`axum::Json`] so that a missing `Content-Type`, a syntax
/// error or a type mismatch all surface as the same 400 response
/// instead of axum's default rejection bodies.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation("Request must be JSON".to_string()))?;

        Ok(AppJson(value))
    }
}
