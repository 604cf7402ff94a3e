use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{PassStatus, PassType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePassDto {
    #[schema(value_type = String, example = "standard")]
    pub pass_type: PassType,
    pub amount_paid: i64,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub is_reva_student: bool,
    #[serde(default)]
    pub srn: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassDto {
    pub id: i32,
    pub user_id: i32,
    pub display_id: String,
    #[schema(value_type = String, example = "standard")]
    pub pass_type: PassType,
    #[schema(value_type = String, example = "active")]
    pub status: PassStatus,
    pub amount_paid: i64,
    /// Credit balance redeemed against the base price
    pub credit_applied: i64,
    pub srn: Option<String>,
    pub department: Option<String>,
    pub checked_in_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<entity::festival_pass::Model> for PassDto {
    fn from(pass: entity::festival_pass::Model) -> Self {
        Self {
            id: pass.id,
            user_id: pass.user_id,
            display_id: pass.display_id,
            pass_type: pass.pass_type,
            status: pass.status,
            amount_paid: pass.amount_paid,
            credit_applied: pass.credit_applied,
            srn: pass.srn,
            department: pass.department,
            checked_in_at: pass.checked_in_at,
            created_at: pass.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPassDto {
    /// `true` activates the pass, `false` rejects it
    pub approve: bool,
}
