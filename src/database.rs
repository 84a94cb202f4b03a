pub mod activities;
pub mod participants;
pub mod seed;
pub mod session;

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::info;

use super::MergingtonResult;

// Re-export entities for easier access
pub use activities::{ActiveModel as ActivityModel, Entity as Activities};
pub use participants::{ActiveModel as ParticipantModel, Entity as Participants};
pub use seed::{SeedFixture, seed};
pub use session::Session;

// Entity collection for convenience
pub mod entities {
    pub use super::{Activities, ActivityModel, ParticipantModel, Participants};
}

/// Brings the schema up to date and seeds an empty database. Safe to call on
/// every start.
pub async fn init(db: &DatabaseConnection) -> MergingtonResult<()> {
    Migrator::up(db, None).await?;

    let fixture = SeedFixture::bundled()?;
    let inserted = seed(db, &fixture).await?;

    if inserted == 0 {
        info!("activities already present, skipping seed");
    } else {
        info!("seeded {inserted} activities");
    }

    Ok(())
}
