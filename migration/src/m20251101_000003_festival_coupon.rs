use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_festival_user::FestivalUser;

static FK_COUPON_VOLUNTEER_ID: &str = "fk-festival_coupon-volunteer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalCoupon::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalCoupon::Id))
                    .col(string_uniq(FestivalCoupon::Code))
                    .col(integer(FestivalCoupon::VolunteerId))
                    .col(timestamp(FestivalCoupon::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COUPON_VOLUNTEER_ID)
                    .from_tbl(FestivalCoupon::Table)
                    .from_col(FestivalCoupon::VolunteerId)
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
                    .name(FK_COUPON_VOLUNTEER_ID)
                    .table(FestivalCoupon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FestivalCoupon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FestivalCoupon {
    Table,
    Id,
    Code,
    VolunteerId,
    CreatedAt,
}
