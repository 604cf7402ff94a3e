use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{error::ErrorKind, service::auth::capability::Action};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {user_id:?} is not permitted to {action}")]
    Forbidden { user_id: i32, action: Action },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => ErrorKind::Unauthorized,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                kind.response("You need to be logged in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                kind.response("You need to be logged in")
            }
            Self::Forbidden { user_id, action } => {
                tracing::debug!(user_id = %user_id, action = %action, "{}", self);

                kind.response(format!("You are not permitted to {}", action))
            }
        }
    }
}
