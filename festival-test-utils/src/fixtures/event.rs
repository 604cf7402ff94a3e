use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn event<'a>(&'a self) -> EventFixtures<'a> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    pub async fn insert_event(
        &self,
        name: &str,
        fee: i64,
        min_team_size: i32,
        max_team_size: i32,
    ) -> Result<entity::festival_event::Model, TestError> {
        Ok(
            entity::prelude::FestivalEvent::insert(entity::festival_event::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                venue: ActiveValue::Set(None),
                fee: ActiveValue::Set(fee),
                min_team_size: ActiveValue::Set(min_team_size),
                max_team_size: ActiveValue::Set(max_team_size),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
