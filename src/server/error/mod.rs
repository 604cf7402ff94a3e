//! Error types for the festival server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, events, registration, passes, coupons). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions. Every error response carries an [`ErrorDto`] with a human-readable message and
//! a short machine-checkable category code taken from [`ErrorKind`].

pub mod auth;
pub mod config;
pub mod coupon;
pub mod event;
pub mod pass;
pub mod registration;
pub mod retry;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, coupon::CouponError, event::EventError,
        pass::PassError, registration::RegistrationError,
    },
};

/// Main error type for the festival server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Event catalogue error.
    #[error(transparent)]
    EventError(#[from] EventError),
    /// Team registration error.
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Pass purchase, verification or check-in error.
    #[error(transparent)]
    PassError(#[from] PassError),
    /// Coupon management error.
    #[error(transparent)]
    CouponError(#[from] CouponError),
    /// Request body missing, not JSON or not matching the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the service's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Category of an error as reported to API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    InvalidInput,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::InvalidInput => "invalid_input",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }

    /// Builds the JSON error response for this category with the provided message.
    pub fn response(self, message: impl Into<String>) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                error: message.into(),
                code: self.code().to_string(),
            }),
        )
            .into_response()
    }
}

impl Error {
    /// Category this error is reported as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthError(err) => err.kind(),
            Self::EventError(err) => err.kind(),
            Self::RegistrationError(err) => err.kind(),
            Self::PassError(err) => err.kind(),
            Self::CouponError(err) => err.kind(),
            Self::JsonRejection(_) => ErrorKind::InvalidInput,
            Self::DbErr(err) if is_unique_violation(err) => ErrorKind::Conflict,
            _ => ErrorKind::Internal,
        }
    }
}

/// Returns true when the database rejected a write due to a unique constraint.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Converts application errors into HTTP responses.
///
/// Domain errors are mapped by their own `IntoResponse` implementations. Unique constraint
/// violations raised by the database are reported as 409 Conflict, since they mean a concurrent
/// request already created the same record. Everything else is a 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            Self::RegistrationError(err) => err.into_response(),
            Self::PassError(err) => err.into_response(),
            Self::CouponError(err) => err.into_response(),
            Self::JsonRejection(err) => {
                tracing::debug!("Rejected request body: {}", err);

                ErrorKind::InvalidInput.response(err.body_text())
            }
            Self::DbErr(err) if is_unique_violation(&err) => {
                tracing::debug!("Unique constraint violation: {}", err);

                ErrorKind::Conflict.response("This record already exists")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        ErrorKind::Internal.response("Internal server error")
    }
}

#[cfg(test)]
impl From<Error> for festival_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::Application(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use sea_orm::DbErr;

    use super::{registration::RegistrationError, Error, ErrorKind};

    /// Expect domain errors to keep their category through the top-level error
    #[test]
    fn reports_domain_error_kind() {
        let err = Error::from(RegistrationError::EmptyRoster);

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    /// Expect generic database errors to surface as 500 without leaking details
    #[test]
    fn reports_database_error_as_internal() {
        let err = Error::DbErr(DbErr::Custom("connection reset".to_string()));

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// Expect application errors to propagate through test results with their message
    #[test]
    fn converts_into_test_error() {
        let err: festival_test_utils::TestError = Error::from(RegistrationError::EmptyRoster).into();

        assert!(matches!(err, festival_test_utils::TestError::Application(_)));
        assert_eq!(
            err.to_string(),
            Error::from(RegistrationError::EmptyRoster).to_string()
        );
    }
}
