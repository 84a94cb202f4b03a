mod common;

use common::{CHESS_CLUB, NEW_STUDENT, setup};
use mergington::{
    database::{ActivityModel, Session},
    enrollment::{self, list_activities, participant_count, sign_up, unregister},
    error::{EnrollmentError, ErrorKind},
};
use sea_orm::{ActiveModelTrait, DbErr, Set, TransactionTrait};

async fn add_activity(state: &mergington::state::AppState, name: &str, capacity: i32) {
    ActivityModel {
        name: Set(name.to_string()),
        description: Set("Test activity".to_string()),
        schedule: Set("Whenever".to_string()),
        max_participants: Set(capacity),
    }
    .insert(&state.db)
    .await
    .unwrap();
}

#[tokio::test]
async fn lists_seeded_activities() {
    let state = setup().await;

    let listing = list_activities(&state.db).await.unwrap();
    assert_eq!(listing.len(), 9);

    let chess = &listing[CHESS_CLUB];
    assert_eq!(chess.max_participants, 12);
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(
        chess.participants,
        ["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn activities_without_participants_are_listed() {
    let state = setup().await;
    add_activity(&state, "Empty Club", 3).await;

    let listing = list_activities(&state.db).await.unwrap();
    assert!(listing["Empty Club"].participants.is_empty());
}

#[tokio::test]
async fn sign_up_appends_in_insertion_order() {
    let state = setup().await;

    let message = sign_up(&state.db, CHESS_CLUB, NEW_STUDENT).await.unwrap();
    assert_eq!(message, "Signed up new@mergington.edu for Chess Club");

    let listing = list_activities(&state.db).await.unwrap();
    assert_eq!(
        listing[CHESS_CLUB].participants,
        [
            "michael@mergington.edu",
            "daniel@mergington.edu",
            NEW_STUDENT
        ]
    );
}

#[tokio::test]
async fn signing_up_twice_is_a_conflict() {
    let state = setup().await;

    sign_up(&state.db, CHESS_CLUB, NEW_STUDENT).await.unwrap();
    let err = sign_up(&state.db, CHESS_CLUB, NEW_STUDENT)
        .await
        .unwrap_err();

    assert!(matches!(err, EnrollmentError::AlreadySignedUp));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(participant_count(&state.db, CHESS_CLUB).await.unwrap(), 3);
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let state = setup().await;

    let err = sign_up(&state.db, "Unknown Club", "x@y.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::ActivityNotFound));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = unregister(&state.db, "Unknown Club", "x@y.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::ActivityNotFound));
}

#[tokio::test]
async fn full_activity_rejects_signups() {
    let state = setup().await;
    add_activity(&state, "Tiny Club", 1).await;

    sign_up(&state.db, "Tiny Club", "first@mergington.edu")
        .await
        .unwrap();
    let err = sign_up(&state.db, "Tiny Club", "second@mergington.edu")
        .await
        .unwrap_err();

    assert!(matches!(err, EnrollmentError::ActivityFull));
    assert_eq!(participant_count(&state.db, "Tiny Club").await.unwrap(), 1);
}

#[tokio::test]
async fn zero_capacity_activity_is_always_full() {
    let state = setup().await;
    add_activity(&state, "Closed Club", 0).await;

    let err = sign_up(&state.db, "Closed Club", NEW_STUDENT)
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::ActivityFull));
}

#[tokio::test]
async fn duplicate_is_reported_before_capacity() {
    let state = setup().await;
    add_activity(&state, "Tiny Club", 1).await;

    sign_up(&state.db, "Tiny Club", NEW_STUDENT).await.unwrap();
    let err = sign_up(&state.db, "Tiny Club", NEW_STUDENT)
        .await
        .unwrap_err();

    assert!(matches!(err, EnrollmentError::AlreadySignedUp));
}

#[tokio::test]
async fn participants_never_exceed_capacity() {
    let state = setup().await;

    let mut accepted = 0;
    for i in 0..15 {
        match sign_up(&state.db, "Math Club", &format!("student{i}@mergington.edu")).await {
            Ok(_) => accepted += 1,
            Err(EnrollmentError::ActivityFull) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(accepted, 8);

    let listing = list_activities(&state.db).await.unwrap();
    for (name, activity) in &listing {
        assert!(
            activity.participants.len() <= activity.max_participants as usize,
            "{name} is over capacity"
        );
    }
    assert_eq!(listing["Math Club"].participants.len(), 10);
}

#[tokio::test]
async fn unregistering_a_stranger_is_a_conflict() {
    let state = setup().await;

    let err = unregister(&state.db, CHESS_CLUB, NEW_STUDENT)
        .await
        .unwrap_err();

    assert!(matches!(err, EnrollmentError::NotSignedUp));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(participant_count(&state.db, CHESS_CLUB).await.unwrap(), 2);
}

#[tokio::test]
async fn enrollment_is_per_activity() {
    let state = setup().await;

    sign_up(&state.db, CHESS_CLUB, NEW_STUDENT).await.unwrap();
    sign_up(&state.db, "Art Club", NEW_STUDENT).await.unwrap();

    let err = unregister(&state.db, "Drama Club", NEW_STUDENT)
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::NotSignedUp));

    unregister(&state.db, "Art Club", NEW_STUDENT).await.unwrap();
    assert_eq!(participant_count(&state.db, CHESS_CLUB).await.unwrap(), 3);
}

#[tokio::test]
async fn sign_up_then_unregister_restores_the_count() {
    let state = setup().await;

    for activity in ["Chess Club", "Gym Class", "Debate Team"] {
        let before = participant_count(&state.db, activity).await.unwrap();

        sign_up(&state.db, activity, NEW_STUDENT).await.unwrap();
        assert_eq!(
            participant_count(&state.db, activity).await.unwrap(),
            before + 1
        );

        let message = unregister(&state.db, activity, NEW_STUDENT).await.unwrap();
        assert_eq!(message, format!("Unregistered {NEW_STUDENT} from {activity}"));
        assert_eq!(participant_count(&state.db, activity).await.unwrap(), before);
    }
}

#[tokio::test]
async fn uncommitted_write_rolls_back() {
    let state = setup().await;

    {
        let txn = state.db.begin().await.unwrap();
        enrollment::enroll(&txn, CHESS_CLUB, NEW_STUDENT)
            .await
            .unwrap();
    }

    assert_eq!(participant_count(&state.db, CHESS_CLUB).await.unwrap(), 2);
}

#[tokio::test]
async fn session_writes_are_committed() {
    let state = setup().await;
    let session = Session::open(&state.db);

    sign_up(session.connection(), CHESS_CLUB, NEW_STUDENT)
        .await
        .unwrap();
    drop(session);

    assert_eq!(participant_count(&state.db, CHESS_CLUB).await.unwrap(), 3);
}

#[test]
fn storage_errors_are_server_errors() {
    let err = EnrollmentError::from(DbErr::Custom("connection lost".to_string()));

    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}
