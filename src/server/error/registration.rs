use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::ErrorKind;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Event ID {0} not found")]
    EventNotFound(i32),
    #[error("Team name must not be empty")]
    EmptyTeamName,
    #[error("Team must have at least one member")]
    EmptyRoster,
    #[error("Every team member needs an email address")]
    EmptyMemberEmail,
    #[error("{0} is listed more than once in the team")]
    DuplicateMemberEmail(String),
    #[error("Team size {size} is outside the allowed range of {min} to {max} members")]
    RosterSizeOutOfBounds { size: usize, min: i32, max: i32 },
    #[error("Team is not eligible for pass redemption, every member needs an active pass")]
    NotEligibleForPassRedemption,
    #[error("Amount paid {paid} is less than the team fee of {expected}")]
    Underpaid { expected: i64, paid: i64 },
    #[error("You have already registered a team for event ID {0}")]
    LeaderAlreadyRegistered(i32),
    #[error("{email} is already registered for event ID {event_id}")]
    MemberAlreadyRegistered { email: String, event_id: i32 },
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EventNotFound(_) => ErrorKind::NotFound,
            Self::LeaderAlreadyRegistered(_) | Self::MemberAlreadyRegistered { .. } => {
                ErrorKind::Conflict
            }
            Self::EmptyTeamName
            | Self::EmptyRoster
            | Self::EmptyMemberEmail
            | Self::DuplicateMemberEmail(_)
            | Self::RosterSizeOutOfBounds { .. }
            | Self::NotEligibleForPassRedemption
            | Self::Underpaid { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        tracing::debug!("Registration rejected: {}", self);

        let kind = self.kind();
        match self {
            Self::EventNotFound(_) => kind.response("Event not found"),
            Self::MemberAlreadyRegistered { email, .. } => {
                kind.response(format!("{} is already registered for this event", email))
            }
            Self::LeaderAlreadyRegistered(_) => {
                kind.response("You have already registered a team for this event")
            }
            err => kind.response(err.to_string()),
        }
    }
}
