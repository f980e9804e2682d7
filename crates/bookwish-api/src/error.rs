use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use bookwish_core::Error;
use bookwish_types::api::ErrorResponse;

/// HTTP-facing error: a status code and an optional message for the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: Some(message.into()) }
    }

    pub fn status(status: StatusCode) -> Self {
        Self { status, message: None }
    }

    pub fn internal() -> Self {
        Self::status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            Error::AlreadyExists => ApiError::new(StatusCode::CONFLICT, err.to_string()),
            Error::NotFound => ApiError::status(StatusCode::NOT_FOUND),
            Error::InvalidCredentials => ApiError::new(StatusCode::UNAUTHORIZED, err.to_string()),
            Error::Hashing(_) | Error::Storage(_) => {
                error!("Request failed: {:#}", err);
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.message {
            Some(error) => (self.status, Json(ErrorResponse { error })).into_response(),
            None => self.status.into_response(),
        }
    }
}
