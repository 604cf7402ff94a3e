use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "festival_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub fee: i64,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::festival_team::Entity")]
    FestivalTeam,
    #[sea_orm(has_many = "super::festival_registration::Entity")]
    FestivalRegistration,
}

impl Related<super::festival_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalTeam.def()
    }
}

impl Related<super::festival_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FestivalRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
