use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub event_id: i32,
    pub leader_id: i32,
    #[sea_orm(unique)]
    pub join_code: String,
    pub amount_paid: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::festival_event::Entity",
        from = "Column::EventId",
        to = "super::festival_event::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalEvent,
    #[sea_orm(
        belongs_to = "super::festival_user::Entity",
        from = "Column::LeaderId",
        to = "super::festival_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalUser,
    #[sea_orm(has_many = "super::festival_team_member::Entity")]
    FestivalTeamMember,
}

impl Related<super::festival_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalEvent.def()
    }
}

impl Related<super::festival_team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalTeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
