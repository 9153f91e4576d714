//! Recovery Error Types
//!
//! This module provides recovery-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Several internally-distinct failures share one user-facing message:
//! which answer was wrong, whether an email exists, and which token check
//! failed are never revealed in the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Recovery-specific result type alias
pub type RecoveryResult<T> = Result<T, RecoveryError>;

/// User-facing message shared by every token-class failure
const TOKEN_FAILURE_MESSAGE: &str =
    "Password reset could not be completed. Please verify your security questions again.";

/// Recovery-specific error variants
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// Email is malformed or outside the expected domain
    #[error("Invalid email address")]
    InvalidEmail,

    /// Request shape is wrong (answer count, empty fields)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// New password fails the composition policy
    #[error("Password does not meet policy: {0}")]
    WeakPassword(String),

    /// One or more security answers were wrong (or no set exists)
    #[error("Security answers incorrect")]
    AnswersIncorrect,

    /// Rate limit exceeded
    #[error("Too many verification attempts")]
    RateLimited,

    /// Verification token absent or already consumed
    #[error("Verification token not found or already used")]
    TokenNotFound,

    /// Verification token past its expiry
    #[error("Verification token expired")]
    TokenExpired,

    /// Consumed token was issued for a different email
    #[error("Verification token does not match the supplied email")]
    TokenMismatch,

    /// Consumed token's user no longer maps to the supplied email
    #[error("Verification token does not map to a matching account")]
    UserMismatch,

    /// Requester is not the owner of the record being changed
    #[error("Requester does not own this account")]
    NotOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecoveryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecoveryError::InvalidEmail
            | RecoveryError::InvalidInput(_)
            | RecoveryError::WeakPassword(_) => StatusCode::BAD_REQUEST,
            RecoveryError::AnswersIncorrect => StatusCode::UNAUTHORIZED,
            RecoveryError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RecoveryError::TokenNotFound
            | RecoveryError::TokenExpired
            | RecoveryError::TokenMismatch
            | RecoveryError::UserMismatch => StatusCode::GONE,
            RecoveryError::NotOwner => StatusCode::FORBIDDEN,
            RecoveryError::Database(_) | RecoveryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecoveryError::InvalidEmail
            | RecoveryError::InvalidInput(_)
            | RecoveryError::WeakPassword(_) => ErrorKind::BadRequest,
            RecoveryError::AnswersIncorrect => ErrorKind::Unauthorized,
            RecoveryError::RateLimited => ErrorKind::TooManyRequests,
            RecoveryError::TokenNotFound
            | RecoveryError::TokenExpired
            | RecoveryError::TokenMismatch
            | RecoveryError::UserMismatch => ErrorKind::Gone,
            RecoveryError::NotOwner => ErrorKind::Forbidden,
            RecoveryError::Database(_) | RecoveryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// The stable message that crosses to the client
    ///
    /// Token-class failures collapse to one string; backend failures
    /// never leak their internal text.
    pub fn user_message(&self) -> String {
        match self {
            RecoveryError::InvalidEmail => "Invalid email address".to_string(),
            RecoveryError::InvalidInput(msg) => msg.clone(),
            RecoveryError::WeakPassword(msg) => msg.clone(),
            RecoveryError::AnswersIncorrect => "Security answers incorrect".to_string(),
            RecoveryError::RateLimited => {
                "Too many verification attempts. Please try again later.".to_string()
            }
            RecoveryError::TokenNotFound
            | RecoveryError::TokenExpired
            | RecoveryError::TokenMismatch
            | RecoveryError::UserMismatch => TOKEN_FAILURE_MESSAGE.to_string(),
            RecoveryError::NotOwner => {
                "You can only manage your own security questions".to_string()
            }
            RecoveryError::Database(_) | RecoveryError::Internal(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RecoveryError::Database(e) => {
                tracing::error!(error = %e, "Recovery database error");
            }
            RecoveryError::Internal(msg) => {
                tracing::error!(message = %msg, "Recovery internal error");
            }
            RecoveryError::AnswersIncorrect => {
                tracing::warn!("Security answer verification failed");
            }
            RecoveryError::RateLimited => {
                tracing::warn!("Recovery rate limit exceeded");
            }
            RecoveryError::TokenNotFound => {
                tracing::warn!("Verification token not found or already consumed");
            }
            RecoveryError::TokenExpired => {
                tracing::warn!("Verification token expired");
            }
            RecoveryError::TokenMismatch => {
                tracing::warn!("Verification token email mismatch");
            }
            RecoveryError::UserMismatch => {
                tracing::warn!("Verification token user mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Recovery error");
            }
        }
    }
}

impl From<RecoveryError> for AppError {
    fn from(err: RecoveryError) -> Self {
        AppError::new(err.kind(), err.user_message())
    }
}

impl IntoResponse for RecoveryError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<platform::answer::AnswerHashError> for RecoveryError {
    fn from(err: platform::answer::AnswerHashError) -> Self {
        RecoveryError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for RecoveryError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        RecoveryError::Internal(err.to_string())
    }
}
