use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummaryDto {
    /// Amount collected for passes that were not rejected
    pub pass_revenue: i64,
    /// Amount collected for team registrations
    pub registration_revenue: i64,
    /// Credits granted but not yet redeemed
    pub outstanding_credit: i64,
    pub active_passes: u64,
    pub pending_passes: u64,
    pub rejected_passes: u64,
}
