pub use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_081200_create_table_activities::Migration),
            Box::new(m20251019_081500_create_table_participants::Migration),
        ]
    }
}

mod m20251019_081200_create_table_activities;
mod m20251019_081500_create_table_participants;
