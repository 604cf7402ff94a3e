use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How the team intends to settle the registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Redeem the members' festival passes, only valid when every member holds one
    Pass,
    /// Pay the team fee
    Online,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub email: String,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamDto {
    pub team_name: String,
    pub members: Vec<TeamMemberDto>,
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub amount_paid: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamResponseDto {
    pub success: bool,
    pub team_id: i32,
    /// Amount charged for the team, either `0` or the full event fee
    pub amount_paid: i64,
    pub message: String,
}
