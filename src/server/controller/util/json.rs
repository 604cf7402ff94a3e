use axum::extract::FromRequest;

use crate::server::error::Error;

/// JSON request body whose rejections are reported as an `invalid_input` [`Error`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
