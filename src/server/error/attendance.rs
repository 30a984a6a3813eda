use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a trainer check-in or check-out is refused.
///
/// Every variant is a terminal validation outcome and is reported to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// A required target trainer ID was not supplied.
    #[error("{0}")]
    InvalidRequest(String),

    /// The actor tried to act on another trainer's session.
    #[error("{0}")]
    Forbidden(String),

    /// The target trainer does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The target user exists but is not a trainer.
    #[error("{0}")]
    InvalidRole(String),

    /// An open session already exists on check-in, or none exists on check-out.
    #[error("{0}")]
    Conflict(String),
}

/// Converts attendance errors into HTTP responses.
///
/// - `InvalidRequest` / `InvalidRole` → 400 Bad Request
/// - `Forbidden` → 403 Forbidden
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRequest(_) | Self::InvalidRole(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
