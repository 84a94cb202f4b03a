use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_081200_create_table_activities::Activities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(pk_auto(Participants::Id))
                    .col(string(Participants::ActivityName).not_null())
                    .col(string(Participants::Email).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participants_activity_name")
                            .from(Participants::Table, Participants::ActivityName)
                            .to(Activities::Table, Activities::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The double-signup guard that holds under concurrent inserts.
        manager
            .create_index(
                Index::create()
                    .name("uq_activity_participant")
                    .table(Participants::Table)
                    .col(Participants::ActivityName)
                    .col(Participants::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_activity_participant")
                    .table(Participants::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    ActivityName,
    Email,
}
