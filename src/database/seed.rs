use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use serde::Deserialize;
use std::collections::HashSet;
#[allow(unused_imports)]
use tracing::{debug, info};

use super::{ActivityModel, ParticipantModel, entities::Activities};
use crate::MergingtonResult;

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/activities.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFixture {
    pub activities: Vec<SeedActivity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl SeedFixture {
    /// The fixture compiled into the binary.
    pub fn bundled() -> MergingtonResult<Self> {
        Self::parse(BUNDLED_FIXTURE)
    }

    pub fn parse(text: &str) -> MergingtonResult<Self> {
        let fixture: SeedFixture = toml::from_str(text)?;
        fixture.validate()?;

        Ok(fixture)
    }

    /// Rejects fixtures that would break the schema or the capacity rule.
    pub fn validate(&self) -> Result<(), String> {
        let mut names = HashSet::new();

        for activity in &self.activities {
            if !names.insert(activity.name.as_str()) {
                return Err(format!("duplicate activity {:?}", activity.name));
            }

            if activity.max_participants < 0 {
                return Err(format!(
                    "{:?} has a negative max_participants",
                    activity.name
                ));
            }

            if activity.participants.len() > activity.max_participants as usize {
                return Err(format!(
                    "{:?} seeds more participants than it has room for",
                    activity.name
                ));
            }

            let mut emails = HashSet::new();
            if let Some(email) = activity
                .participants
                .iter()
                .find(|email| !emails.insert(email.as_str()))
            {
                return Err(format!("{email} is seeded twice into {:?}", activity.name));
            }
        }

        Ok(())
    }
}

/// Inserts the fixture in one transaction, but only into an empty
/// `activities` table. Returns how many activities were inserted.
pub async fn seed(db: &DatabaseConnection, fixture: &SeedFixture) -> MergingtonResult<usize> {
    let txn = db.begin().await?;

    let existing = Activities::find().count(&txn).await?;
    if existing > 0 {
        debug!("found {existing} activities, not seeding");
        return Ok(0);
    }

    for activity in &fixture.activities {
        ActivityModel {
            name: Set(activity.name.clone()),
            description: Set(activity.description.clone()),
            schedule: Set(activity.schedule.clone()),
            max_participants: Set(activity.max_participants),
        }
        .insert(&txn)
        .await?;

        for email in &activity.participants {
            ParticipantModel {
                activity_name: Set(activity.name.clone()),
                email: Set(email.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    Ok(fixture.activities.len())
}
