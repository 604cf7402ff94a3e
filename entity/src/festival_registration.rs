use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RegistrationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub team_id: Option<i32>,
    pub status: RegistrationStatus,
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
        belongs_to = "super::festival_event::Entity",
        from = "Column::EventId",
        to = "super::festival_event::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalEvent,
    #[sea_orm(
        belongs_to = "super::festival_team::Entity",
        from = "Column::TeamId",
        to = "super::festival_team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FestivalTeam,
}

impl Related<super::festival_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalUser.def()
    }
}

impl Related<super::festival_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalEvent.def()
    }
}

impl Related<super::festival_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
