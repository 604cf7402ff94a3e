use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_festival_user::FestivalUser,
    m20251101_000005_festival_team::FestivalTeam,
};

static IDX_TEAM_MEMBER_TEAM_ID: &str = "idx-festival_team_member-team_id";
static IDX_TEAM_MEMBER_EMAIL: &str = "idx-festival_team_member-email";
static FK_TEAM_MEMBER_TEAM_ID: &str = "fk-festival_team_member-team_id";
static FK_TEAM_MEMBER_USER_ID: &str = "fk-festival_team_member-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalTeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalTeamMember::Id))
                    .col(integer(FestivalTeamMember::TeamId))
                    .col(integer_null(FestivalTeamMember::UserId))
                    .col(string(FestivalTeamMember::Email))
                    .col(string(FestivalTeamMember::Role))
                    .col(string_len(FestivalTeamMember::Status, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_MEMBER_TEAM_ID)
                    .table(FestivalTeamMember::Table)
                    .col(FestivalTeamMember::TeamId)
                    .to_owned(),
            )
            .await?;

        // Pending members are matched by email once they sign up
        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_MEMBER_EMAIL)
                    .table(FestivalTeamMember::Table)
                    .col(FestivalTeamMember::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBER_TEAM_ID)
                    .from_tbl(FestivalTeamMember::Table)
                    .from_col(FestivalTeamMember::TeamId)
                    .to_tbl(FestivalTeam::Table)
                    .to_col(FestivalTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBER_USER_ID)
                    .from_tbl(FestivalTeamMember::Table)
                    .from_col(FestivalTeamMember::UserId)
                    .to_tbl(FestivalUser::Table)
                    .to_col(FestivalUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_MEMBER_USER_ID)
                    .table(FestivalTeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_MEMBER_TEAM_ID)
                    .table(FestivalTeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_MEMBER_EMAIL)
                    .table(FestivalTeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_MEMBER_TEAM_ID)
                    .table(FestivalTeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalTeamMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FestivalTeamMember {
    Table,
    Id,
    TeamId,
    UserId,
    Email,
    Role,
    Status,
}
