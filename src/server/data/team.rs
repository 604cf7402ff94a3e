use chrono::Utc;
use sea_orm::{
    sea_query::{Alias, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::db::TeamModel;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new team for an event
    ///
    /// # Arguments
    /// - `name`: Display name of the team
    /// - `event_id`: ID of the event the team registers for
    /// - `leader_id`: ID of the user submitting the registration
    /// - `join_code`: Unique code other members can use to find the team
    /// - `amount_paid`: Final amount charged for the team
    pub async fn create(
        &self,
        name: String,
        event_id: i32,
        leader_id: i32,
        join_code: String,
        amount_paid: i64,
    ) -> Result<TeamModel, DbErr> {
        let team = entity::festival_team::ActiveModel {
            name: ActiveValue::Set(name),
            event_id: ActiveValue::Set(event_id),
            leader_id: ActiveValue::Set(leader_id),
            join_code: ActiveValue::Set(join_code),
            amount_paid: ActiveValue::Set(amount_paid),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Get the team a leader registered for an event, if any
    pub async fn get_by_event_and_leader(
        &self,
        event_id: i32,
        leader_id: i32,
    ) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::FestivalTeam::find()
            .filter(entity::festival_team::Column::EventId.eq(event_id))
            .filter(entity::festival_team::Column::LeaderId.eq(leader_id))
            .one(self.db)
            .await
    }

    /// Sum of the registration fees paid by all teams
    pub async fn total_amount_paid(&self) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::FestivalTeam::find()
            .select_only()
            .column_as(
                entity::festival_team::Column::AmountPaid
                    .sum()
                    .cast_as(Alias::new("BIGINT")),
                "total",
            )
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }
}
