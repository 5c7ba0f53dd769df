use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::auth_service::AuthServiceError;
use crate::services::donation_service::DonationServiceError;
use crate::services::user_service::UserServiceError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email or referral code already registered")]
    DuplicateRegistration,

    #[error("Referral code does not exist.")]
    UnknownReferralCode,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Constraint violations and bad input get the friendly plain-text
        // bodies the pages expect; anything else is a generic 500 with the
        // detail going to the log.
        match self {
            AppError::DuplicateRegistration => (
                StatusCode::OK,
                "Email or referral code already registered".to_string(),
            )
                .into_response(),
            AppError::UnknownReferralCode => {
                (StatusCode::OK, "Referral code does not exist.".to_string()).into_response()
            }
            AppError::InvalidCredentials => {
                (StatusCode::OK, "Invalid email or password.".to_string()).into_response()
            }
            AppError::Validation(msg) => (StatusCode::OK, msg).into_response(),
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
                    .into_response()
            }
            AppError::Template(e) => {
                tracing::error!("template rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::InvalidEmail => AppError::Validation("Invalid email".to_string()),
            UserServiceError::PasswordMismatch => {
                AppError::Validation("Passwords do not match".to_string())
            }
            UserServiceError::AlreadyRegistered => AppError::DuplicateRegistration,
            UserServiceError::HashingError(msg) => AppError::Internal(msg),
            UserServiceError::RepositoryError(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::MissingCredentials => {
                AppError::Validation("Please enter both email and password.".to_string())
            }
            AuthServiceError::InvalidCredentials => AppError::InvalidCredentials,
            AuthServiceError::RepositoryError(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<DonationServiceError> for AppError {
    fn from(err: DonationServiceError) -> Self {
        match err {
            DonationServiceError::ReferralCodeUnknown => AppError::UnknownReferralCode,
            DonationServiceError::RepositoryError(e) => AppError::Internal(e.to_string()),
        }
    }
}
