use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_credit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub reason: String,
    pub related_team_id: Option<i32>,
    pub related_event_id: Option<i32>,
    pub used: bool,
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
        belongs_to = "super::festival_team::Entity",
        from = "Column::RelatedTeamId",
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

impl ActiveModelBehavior for ActiveModel {}
