use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("{0}")]
    InvalidInput(String),

    /// Carries the provider detail for the server log; the client only ever
    /// sees the generic body.
    #[error("Failed to send email: {0}")]
    DeliveryFailed(String),
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            CustomError::DeliveryFailed(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            CustomError::InvalidInput(msg) => json!({ "error": msg }),
            CustomError::DeliveryFailed(..) => json!({ "error": "Failed to send email" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
