use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_festival_user::FestivalUser,
    m20251101_000005_festival_team::FestivalTeam,
};

static IDX_CREDIT_USER_ID_USED: &str = "idx-festival_credit-user_id-used";
static FK_CREDIT_USER_ID: &str = "fk-festival_credit-user_id";
static FK_CREDIT_RELATED_TEAM_ID: &str = "fk-festival_credit-related_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalCredit::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalCredit::Id))
                    .col(integer(FestivalCredit::UserId))
                    .col(big_integer(FestivalCredit::Amount))
                    .col(string(FestivalCredit::Reason))
                    .col(integer_null(FestivalCredit::RelatedTeamId))
                    .col(integer_null(FestivalCredit::RelatedEventId))
                    .col(boolean(FestivalCredit::Used).default(false))
                    .col(timestamp(FestivalCredit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CREDIT_USER_ID_USED)
                    .table(FestivalCredit::Table)
                    .col(FestivalCredit::UserId)
                    .col(FestivalCredit::Used)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CREDIT_USER_ID)
                    .from_tbl(FestivalCredit::Table)
                    .from_col(FestivalCredit::UserId)
                    .to_tbl(FestivalUser::Table)
                    .to_col(FestivalUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CREDIT_RELATED_TEAM_ID)
                    .from_tbl(FestivalCredit::Table)
                    .from_col(FestivalCredit::RelatedTeamId)
                    .to_tbl(FestivalTeam::Table)
                    .to_col(FestivalTeam::Id)
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
                    .name(FK_CREDIT_RELATED_TEAM_ID)
                    .table(FestivalCredit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CREDIT_USER_ID)
                    .table(FestivalCredit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CREDIT_USER_ID_USED)
                    .table(FestivalCredit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalCredit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FestivalCredit {
    Table,
    Id,
    UserId,
    Amount,
    Reason,
    RelatedTeamId,
    RelatedEventId,
    Used,
    CreatedAt,
}
