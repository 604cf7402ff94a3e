use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_festival_user::FestivalUser,
    m20251101_000002_festival_event::FestivalEvent,
    m20251101_000005_festival_team::FestivalTeam,
};

static IDX_REGISTRATION_USER_EVENT: &str = "idx-festival_registration-user_id-event_id";
static FK_REGISTRATION_USER_ID: &str = "fk-festival_registration-user_id";
static FK_REGISTRATION_EVENT_ID: &str = "fk-festival_registration-event_id";
static FK_REGISTRATION_TEAM_ID: &str = "fk-festival_registration-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalRegistration::Id))
                    .col(integer(FestivalRegistration::UserId))
                    .col(integer(FestivalRegistration::EventId))
                    .col(integer_null(FestivalRegistration::TeamId))
                    .col(string_len(FestivalRegistration::Status, 16))
                    .col(timestamp(FestivalRegistration::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_USER_EVENT)
                    .table(FestivalRegistration::Table)
                    .col(FestivalRegistration::UserId)
                    .col(FestivalRegistration::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_USER_ID)
                    .from_tbl(FestivalRegistration::Table)
                    .from_col(FestivalRegistration::UserId)
                    .to_tbl(FestivalUser::Table)
                    .to_col(FestivalUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_EVENT_ID)
                    .from_tbl(FestivalRegistration::Table)
                    .from_col(FestivalRegistration::EventId)
                    .to_tbl(FestivalEvent::Table)
                    .to_col(FestivalEvent::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_TEAM_ID)
                    .from_tbl(FestivalRegistration::Table)
                    .from_col(FestivalRegistration::TeamId)
                    .to_tbl(FestivalTeam::Table)
                    .to_col(FestivalTeam::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_REGISTRATION_TEAM_ID,
            FK_REGISTRATION_EVENT_ID,
            FK_REGISTRATION_USER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FestivalRegistration::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_USER_EVENT)
                    .table(FestivalRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalRegistration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FestivalRegistration {
    Table,
    Id,
    UserId,
    EventId,
    TeamId,
    Status,
    CreatedAt,
}
