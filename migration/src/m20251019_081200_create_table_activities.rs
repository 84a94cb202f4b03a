use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(string(Activities::Name).primary_key())
                    .col(string(Activities::Description).not_null())
                    .col(string(Activities::Schedule).not_null())
                    .col(
                        integer(Activities::MaxParticipants)
                            .not_null()
                            .check(Expr::col(Activities::MaxParticipants).gte(0)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Activities {
    Table,
    Name,
    Description,
    Schedule,
    MaxParticipants,
}
