use chrono::Utc;
use entity::sea_orm_active_enums::RegistrationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::RegistrationModel;

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
        team_id: Option<i32>,
        status: RegistrationStatus,
    ) -> Result<RegistrationModel, DbErr> {
        let registration = entity::festival_registration::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            team_id: ActiveValue::Set(team_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        registration.insert(self.db).await
    }

    /// Gets existing registrations for an event held by any of the provided users
    pub async fn find_many_by_event_and_users(
        &self,
        event_id: i32,
        user_ids: &[i32],
    ) -> Result<Vec<RegistrationModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FestivalRegistration::find()
            .filter(entity::festival_registration::Column::EventId.eq(event_id))
            .filter(entity::festival_registration::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_many_by_team_id(
        &self,
        team_id: i32,
    ) -> Result<Vec<RegistrationModel>, DbErr> {
        entity::prelude::FestivalRegistration::find()
            .filter(entity::festival_registration::Column::TeamId.eq(team_id))
            .all(self.db)
            .await
    }
}
