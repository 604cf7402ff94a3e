use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::{model::event::CreateEventDto, server::model::db::EventModel};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event from validated input
    pub async fn create(&self, event: CreateEventDto) -> Result<EventModel, DbErr> {
        let event = entity::festival_event::ActiveModel {
            name: ActiveValue::Set(event.name),
            description: ActiveValue::Set(event.description),
            venue: ActiveValue::Set(event.venue),
            fee: ActiveValue::Set(event.fee),
            min_team_size: ActiveValue::Set(event.min_team_size),
            max_team_size: ActiveValue::Set(event.max_team_size),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<EventModel>, DbErr> {
        entity::prelude::FestivalEvent::find_by_id(event_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::FestivalEvent::find()
            .order_by_asc(entity::festival_event::Column::Id)
            .all(self.db)
            .await
    }
}
