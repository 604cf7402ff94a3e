use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_festival_user::FestivalUser,
    m20251101_000003_festival_coupon::FestivalCoupon,
};

static IDX_PASS_USER_ID: &str = "idx-festival_pass-user_id";
static IDX_PASS_STATUS: &str = "idx-festival_pass-status";
static FK_PASS_USER_ID: &str = "fk-festival_pass-user_id";
static FK_PASS_COUPON_ID: &str = "fk-festival_pass-coupon_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalPass::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalPass::Id))
                    .col(integer(FestivalPass::UserId))
                    .col(string_uniq(FestivalPass::DisplayId))
                    .col(string_len(FestivalPass::PassType, 16))
                    .col(string_len(FestivalPass::Status, 32))
                    .col(big_integer(FestivalPass::AmountPaid))
                    .col(big_integer(FestivalPass::CreditApplied))
                    .col(integer_null(FestivalPass::CouponId))
                    .col(string_null(FestivalPass::Srn))
                    .col(string_null(FestivalPass::Department))
                    .col(timestamp_null(FestivalPass::CheckedInAt))
                    .col(timestamp(FestivalPass::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PASS_USER_ID)
                    .table(FestivalPass::Table)
                    .col(FestivalPass::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PASS_STATUS)
                    .table(FestivalPass::Table)
                    .col(FestivalPass::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PASS_USER_ID)
                    .from_tbl(FestivalPass::Table)
                    .from_col(FestivalPass::UserId)
                    .to_tbl(FestivalUser::Table)
                    .to_col(FestivalUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PASS_COUPON_ID)
                    .from_tbl(FestivalPass::Table)
                    .from_col(FestivalPass::CouponId)
                    .to_tbl(FestivalCoupon::Table)
                    .to_col(FestivalCoupon::Id)
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
                    .name(FK_PASS_COUPON_ID)
                    .table(FestivalPass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PASS_USER_ID)
                    .table(FestivalPass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PASS_STATUS)
                    .table(FestivalPass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PASS_USER_ID)
                    .table(FestivalPass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalPass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FestivalPass {
    Table,
    Id,
    UserId,
    DisplayId,
    PassType,
    Status,
    AmountPaid,
    CreditApplied,
    CouponId,
    Srn,
    Department,
    CheckedInAt,
    CreatedAt,
}
