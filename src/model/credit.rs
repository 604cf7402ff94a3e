use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditDto {
    pub id: i32,
    pub amount: i64,
    pub reason: String,
    pub related_team_id: Option<i32>,
    pub related_event_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditBalanceDto {
    /// Sum of all unredeemed credits
    pub balance: i64,
    pub credits: Vec<CreditDto>,
}
