use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::festival_pass::Entity")]
    FestivalPass,
    #[sea_orm(has_many = "super::festival_credit::Entity")]
    FestivalCredit,
    #[sea_orm(has_many = "super::festival_registration::Entity")]
    FestivalRegistration,
}

impl Related<super::festival_pass::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalPass.def()
    }
}

impl Related<super::festival_credit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalCredit.def()
    }
}

impl Related<super::festival_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
