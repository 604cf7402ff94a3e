use entity::sea_orm_active_enums::MemberStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::TeamMemberModel;

pub struct TeamMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamMemberRepository<'a, C> {
    /// Creates a new instance of [`TeamMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Add a roster entry to a team
    ///
    /// `user_id` is `None` for emails that didn't match an account at submission time, such
    /// members are stored as [`MemberStatus::Pending`].
    pub async fn create(
        &self,
        team_id: i32,
        user_id: Option<i32>,
        email: String,
        role: String,
    ) -> Result<TeamMemberModel, DbErr> {
        let status = match user_id {
            Some(_) => MemberStatus::Joined,
            None => MemberStatus::Pending,
        };

        let member = entity::festival_team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            email: ActiveValue::Set(email),
            role: ActiveValue::Set(role),
            status: ActiveValue::Set(status),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn get_many_by_team_id(&self, team_id: i32) -> Result<Vec<TeamMemberModel>, DbErr> {
        entity::prelude::FestivalTeamMember::find()
            .filter(entity::festival_team_member::Column::TeamId.eq(team_id))
            .all(self.db)
            .await
    }
}
