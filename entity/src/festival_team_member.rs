use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MemberStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_team_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub user_id: Option<i32>,
    pub email: String,
    pub role: String,
    pub status: MemberStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::festival_team::Entity",
        from = "Column::TeamId",
        to = "super::festival_team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalTeam,
    #[sea_orm(
        belongs_to = "super::festival_user::Entity",
        from = "Column::UserId",
        to = "super::festival_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FestivalUser,
}

impl Related<super::festival_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
