use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalUser::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalUser::Id))
                    .col(string_uniq(FestivalUser::Email))
                    .col(string_len(FestivalUser::Role, 16))
                    .col(timestamp(FestivalUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FestivalUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FestivalUser {
    Table,
    Id,
    Email,
    Role,
    CreatedAt,
}
