use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FestivalEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(FestivalEvent::Id))
                    .col(string(FestivalEvent::Name))
                    .col(text_null(FestivalEvent::Description))
                    .col(string_null(FestivalEvent::Venue))
                    .col(big_integer(FestivalEvent::Fee))
                    .col(integer(FestivalEvent::MinTeamSize))
                    .col(integer(FestivalEvent::MaxTeamSize))
                    .col(timestamp(FestivalEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FestivalEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FestivalEvent {
    Table,
    Id,
    Name,
    Description,
    Venue,
    Fee,
    MinTeamSize,
    MaxTeamSize,
    CreatedAt,
}
