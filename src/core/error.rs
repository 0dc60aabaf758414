use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The counter store could not complete the statement (connection loss,
    /// pool timeout, constraint violation). Carries the store's message.
    #[error("Ticket counter unavailable: {0}")]
    CounterUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::CounterUnavailable(ref detail) => {
                tracing::error!("Ticket counter unavailable: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ticket counter unavailable".to_string(),
                    Some(vec![detail.clone()]),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
