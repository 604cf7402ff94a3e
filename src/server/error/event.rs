use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::ErrorKind;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0} not found")]
    NotFound(i32),
    #[error("Event name must not be empty")]
    EmptyName,
    #[error("Event fee must not be negative, got {0}")]
    NegativeFee(i64),
    #[error("Invalid team size bounds: minimum {min}, maximum {max}")]
    InvalidTeamSize { min: i32, max: i32 },
}

impl EventError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::EmptyName | Self::NegativeFee(_) | Self::InvalidTeamSize { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let kind = self.kind();
        match self {
            Self::NotFound(_) => kind.response("Event not found"),
            err => kind.response(err.to_string()),
        }
    }
}
