use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_festival_user::FestivalUser,
    m20251101_000002_festival_event::FestivalEvent,
};

static IDX_TEAM_EVENT_LEADER: &str = "idx-festival_team-event_id-leader_id";
static FK_TEAM_EVENT_ID: &str = "fk-festival_team-event_id";
static FK_TEAM_LEADER_ID: &str = "fk-festival_team-leader_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalTeam::Id))
                    .col(string(FestivalTeam::Name))
                    .col(integer(FestivalTeam::EventId))
                    .col(integer(FestivalTeam::LeaderId))
                    .col(string_uniq(FestivalTeam::JoinCode))
                    .col(big_integer(FestivalTeam::AmountPaid))
                    .col(timestamp(FestivalTeam::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A leader may submit one team per event
        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_EVENT_LEADER)
                    .table(FestivalTeam::Table)
                    .col(FestivalTeam::EventId)
                    .col(FestivalTeam::LeaderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_EVENT_ID)
                    .from_tbl(FestivalTeam::Table)
                    .from_col(FestivalTeam::EventId)
                    .to_tbl(FestivalEvent::Table)
                    .to_col(FestivalEvent::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_LEADER_ID)
                    .from_tbl(FestivalTeam::Table)
                    .from_col(FestivalTeam::LeaderId)
                    .to_tbl(FestivalUser::Table)
                    .to_col(FestivalUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_LEADER_ID)
                    .table(FestivalTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_EVENT_ID)
                    .table(FestivalTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_EVENT_LEADER)
                    .table(FestivalTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FestivalTeam {
    Table,
    Id,
    Name,
    EventId,
    LeaderId,
    JoinCode,
    AmountPaid,
    CreatedAt,
}
