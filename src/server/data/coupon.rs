use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::{CouponModel, UserModel};

pub struct CouponRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CouponRepository<'a, C> {
    /// Creates a new instance of [`CouponRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, code: String, volunteer_id: i32) -> Result<CouponModel, DbErr> {
        let coupon = entity::festival_coupon::ActiveModel {
            code: ActiveValue::Set(code),
            volunteer_id: ActiveValue::Set(volunteer_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        coupon.insert(self.db).await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<CouponModel>, DbErr> {
        entity::prelude::FestivalCoupon::find()
            .filter(entity::festival_coupon::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Gets every coupon together with the volunteer it is attributed to
    pub async fn get_all_with_volunteer(
        &self,
    ) -> Result<Vec<(CouponModel, Option<UserModel>)>, DbErr> {
        entity::prelude::FestivalCoupon::find()
            .find_also_related(entity::prelude::FestivalUser)
            .all(self.db)
            .await
    }
}
