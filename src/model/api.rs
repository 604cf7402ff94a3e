use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// Error category: `unauthorized`, `forbidden`, `not_found`, `invalid_input`, `conflict`
    /// or `internal`
    pub code: String,
}
