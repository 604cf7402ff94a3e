use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_coupon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub volunteer_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::festival_user::Entity",
        from = "Column::VolunteerId",
        to = "super::festival_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FestivalUser,
    #[sea_orm(has_many = "super::festival_pass::Entity")]
    FestivalPass,
}

impl Related<super::festival_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalUser.def()
    }
}

impl Related<super::festival_pass::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalPass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
