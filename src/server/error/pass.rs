use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::ErrorKind;

#[derive(Error, Debug)]
pub enum PassError {
    #[error("Pass ID {0} not found")]
    NotFound(i32),
    #[error("Pass with display ID {0} not found")]
    DisplayIdNotFound(String),
    #[error("User ID {0} does not have a pass")]
    NoPass(i32),
    #[error("Amount paid must not be negative, got {0}")]
    NegativeAmount(i64),
    #[error("Amount paid {paid} is less than the expected price of {expected}")]
    Underpaid { expected: i64, paid: i64 },
    #[error("Student passes require an @{0} email address")]
    StudentEmailRequired(String),
    #[error("Student passes require an SRN and department")]
    MissingStudentDetails,
    #[error("Coupon code {0} does not exist")]
    UnknownCoupon(String),
    #[error("User ID {0} already holds an active or pending pass")]
    AlreadyHoldsPass(i32),
    #[error("Pass ID {0} is not awaiting verification")]
    NotPendingVerification(i32),
    #[error("Pass {0} is not active")]
    NotActive(String),
    #[error("Pass {0} has already been checked in")]
    AlreadyCheckedIn(String),
    #[error("Credit balance for user ID {0} changed during purchase")]
    CreditBalanceChanged(i32),
}

impl PassError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::DisplayIdNotFound(_) | Self::NoPass(_) => {
                ErrorKind::NotFound
            }
            Self::AlreadyHoldsPass(_) | Self::AlreadyCheckedIn(_) | Self::CreditBalanceChanged(_) => {
                ErrorKind::Conflict
            }
            Self::NegativeAmount(_)
            | Self::Underpaid { .. }
            | Self::StudentEmailRequired(_)
            | Self::MissingStudentDetails
            | Self::UnknownCoupon(_)
            | Self::NotPendingVerification(_)
            | Self::NotActive(_) => ErrorKind::InvalidInput,
        }
    }
}

impl IntoResponse for PassError {
    fn into_response(self) -> Response {
        tracing::debug!("Pass request rejected: {}", self);

        let kind = self.kind();
        match self {
            Self::NotFound(_) | Self::DisplayIdNotFound(_) => kind.response("Pass not found"),
            Self::NoPass(_) => kind.response("You do not have a pass yet"),
            Self::AlreadyHoldsPass(_) => kind.response("You already hold a pass"),
            Self::CreditBalanceChanged(_) => kind.response(
                "Your credit balance changed while purchasing, please review the price and try again.",
            ),
            err => kind.response(err.to_string()),
        }
    }
}
