use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn credit<'a>(&'a self) -> CreditFixtures<'a> {
        CreditFixtures { setup: self }
    }
}

pub struct CreditFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CreditFixtures<'a> {
    /// Insert a credit not linked to any team or event
    pub async fn insert_credit(
        &self,
        user_id: i32,
        amount: i64,
        used: bool,
    ) -> Result<entity::festival_credit::Model, TestError> {
        Ok(
            entity::prelude::FestivalCredit::insert(entity::festival_credit::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                amount: ActiveValue::Set(amount),
                reason: ActiveValue::Set("Test credit".to_string()),
                related_team_id: ActiveValue::Set(None),
                related_event_id: ActiveValue::Set(None),
                used: ActiveValue::Set(used),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
