use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use entity::sea_orm_active_enums::{PassStatus, PassType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

static NEXT_DISPLAY_ID: AtomicU32 = AtomicU32::new(1);

impl TestContext {
    pub fn pass<'a>(&'a self) -> PassFixtures<'a> {
        PassFixtures { setup: self }
    }
}

pub struct PassFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PassFixtures<'a> {
    /// Insert an unpaid pass for a user
    pub async fn insert_pass(
        &self,
        user_id: i32,
        pass_type: PassType,
        status: PassStatus,
    ) -> Result<entity::festival_pass::Model, TestError> {
        self.insert_pass_with_coupon(user_id, pass_type, status, 0, None)
            .await
    }

    pub async fn insert_pass_with_coupon(
        &self,
        user_id: i32,
        pass_type: PassType,
        status: PassStatus,
        amount_paid: i64,
        coupon_id: Option<i32>,
    ) -> Result<entity::festival_pass::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FestivalPass::insert(entity::festival_pass::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                display_id: ActiveValue::Set(format!(
                    "FEST-T{:07}",
                    NEXT_DISPLAY_ID.fetch_add(1, Ordering::Relaxed)
                )),
                pass_type: ActiveValue::Set(pass_type),
                status: ActiveValue::Set(status),
                amount_paid: ActiveValue::Set(amount_paid),
                credit_applied: ActiveValue::Set(0),
                coupon_id: ActiveValue::Set(coupon_id),
                srn: ActiveValue::Set(None),
                department: ActiveValue::Set(None),
                checked_in_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
