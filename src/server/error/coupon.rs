use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::ErrorKind;

#[derive(Error, Debug)]
pub enum CouponError {
    #[error("Coupon code must not be empty")]
    EmptyCode,
    #[error("Volunteer user ID {0} not found")]
    VolunteerNotFound(i32),
    #[error("User ID {0} is not a volunteer")]
    NotAVolunteer(i32),
    #[error("Coupon code {0} already exists")]
    DuplicateCode(String),
}

impl CouponError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateCode(_) => ErrorKind::Conflict,
            Self::EmptyCode | Self::VolunteerNotFound(_) | Self::NotAVolunteer(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

impl IntoResponse for CouponError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let kind = self.kind();
        kind.response(self.to_string())
    }
}
