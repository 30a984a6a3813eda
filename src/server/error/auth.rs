use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email is unknown or the password does not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has not been approved by an admin.
    #[error("User {0} attempted to sign in before approval")]
    AccountNotApproved(i32),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the attempted action for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not authenticated"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccountNotApproved` → 403 Forbidden with "Account pending approval"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccountNotApproved(_) => (StatusCode::FORBIDDEN, "Account pending approval"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
