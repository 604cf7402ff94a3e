use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn coupon<'a>(&'a self) -> CouponFixtures<'a> {
        CouponFixtures { setup: self }
    }
}

pub struct CouponFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CouponFixtures<'a> {
    pub async fn insert_coupon(
        &self,
        code: &str,
        volunteer_id: i32,
    ) -> Result<entity::festival_coupon::Model, TestError> {
        Ok(
            entity::prelude::FestivalCoupon::insert(entity::festival_coupon::ActiveModel {
                code: ActiveValue::Set(code.to_string()),
                volunteer_id: ActiveValue::Set(volunteer_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
