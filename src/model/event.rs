use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    /// Team registration fee in whole currency units
    pub fee: i64,
    pub min_team_size: i32,
    pub max_team_size: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    pub fee: i64,
    pub min_team_size: i32,
    pub max_team_size: i32,
}
