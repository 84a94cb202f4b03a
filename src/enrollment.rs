//! Listing, signing up and unregistering over any SeaORM connection.
//!
//! Each mutation checks its rules in a fixed order on the plain connection
//! and fails before writing anything. Only the write itself runs inside a
//! transaction, opened right before it and committed right after.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    database::{
        ParticipantModel, activities,
        entities::{Activities, Participants},
        participants,
    },
    error::EnrollmentError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    pub participants: Vec<String>,
}

pub type ActivityListing = BTreeMap<String, ActivityView>;

pub async fn list_activities<C: ConnectionTrait>(db: &C) -> Result<ActivityListing, EnrollmentError> {
    let rows = Activities::find()
        .find_with_related(Participants)
        .order_by_asc(activities::Column::Name)
        .order_by_asc(participants::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(activity, enrolled)| {
            (
                activity.name,
                ActivityView {
                    description: activity.description,
                    schedule: activity.schedule,
                    max_participants: activity.max_participants,
                    participants: enrolled.into_iter().map(|p| p.email).collect(),
                },
            )
        })
        .collect())
}

async fn find_activity<C: ConnectionTrait>(
    db: &C,
    activity_name: &str,
) -> Result<activities::Model, EnrollmentError> {
    Activities::find_by_id(activity_name.to_owned())
        .one(db)
        .await?
        .ok_or(EnrollmentError::ActivityNotFound)
}

async fn find_enrollment<C: ConnectionTrait>(
    db: &C,
    activity_name: &str,
    email: &str,
) -> Result<Option<participants::Model>, EnrollmentError> {
    Ok(Participants::find()
        .filter(participants::Column::ActivityName.eq(activity_name))
        .filter(participants::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn participant_count<C: ConnectionTrait>(
    db: &C,
    activity_name: &str,
) -> Result<u64, EnrollmentError> {
    Ok(Participants::find()
        .filter(participants::Column::ActivityName.eq(activity_name))
        .count(db)
        .await?)
}

/// Runs the signup rules without writing: `ActivityNotFound`,
/// `AlreadySignedUp`, then `ActivityFull`, in that order.
pub async fn check_sign_up<C: ConnectionTrait>(
    db: &C,
    activity_name: &str,
    email: &str,
) -> Result<(), EnrollmentError> {
    let activity = find_activity(db, activity_name).await?;

    if find_enrollment(db, activity_name, email).await?.is_some() {
        return Err(EnrollmentError::AlreadySignedUp);
    }

    let capacity = u64::try_from(activity.max_participants).unwrap_or(0);
    if participant_count(db, activity_name).await? >= capacity {
        return Err(EnrollmentError::ActivityFull);
    }

    Ok(())
}

/// Inserts the participant row in its own transaction.
///
/// Two racing signups for the same pair can both pass [`check_sign_up`]; the
/// unique index rejects the second insert, which surfaces as a storage error.
pub async fn enroll<C: TransactionTrait>(
    db: &C,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let txn = db.begin().await?;

    ParticipantModel {
        activity_name: Set(activity_name.to_owned()),
        email: Set(email.to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Enrolls `email` in `activity_name`: the checks first, then the write.
pub async fn sign_up<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    check_sign_up(db, activity_name, email).await?;
    enroll(db, activity_name, email).await
}

/// Removes `email` from `activity_name`. Fails with `ActivityNotFound` or
/// `NotSignedUp`.
pub async fn unregister<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    find_activity(db, activity_name).await?;

    let enrollment = find_enrollment(db, activity_name, email)
        .await?
        .ok_or(EnrollmentError::NotSignedUp)?;

    let txn = db.begin().await?;

    // Someone else removed the row between the check and the delete.
    let deleted = Participants::delete_by_id(enrollment.id).exec(&txn).await?;
    if deleted.rows_affected == 0 {
        return Err(EnrollmentError::NotSignedUp);
    }

    txn.commit().await?;

    Ok(format!("Unregistered {email} from {activity_name}"))
}
