use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{PassStatus, PassType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_pass")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub display_id: String,
    pub pass_type: PassType,
    pub status: PassStatus,
    pub amount_paid: i64,
    pub credit_applied: i64,
    pub coupon_id: Option<i32>,
    pub srn: Option<String>,
    pub department: Option<String>,
    pub checked_in_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::festival_user::Entity",
        from = "Column::UserId",
        to = "super::festival_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalUser,
    #[sea_orm(
        belongs_to = "super::festival_coupon::Entity",
        from = "Column::CouponId",
        to = "super::festival_coupon::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FestivalCoupon,
}

impl Related<super::festival_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalUser.def()
    }
}

impl Related<super::festival_coupon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalCoupon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
