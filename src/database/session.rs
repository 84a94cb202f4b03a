use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;
use std::convert::Infallible;

use crate::state::AppState;

/// Database access scoped to one request.
///
/// Validation reads run in autocommit on the pool, so a request holds no
/// lock while it checks its rules. The single write each mutation makes is
/// wrapped in its own short transaction inside [`crate::enrollment`]: it
/// commits explicitly and rolls back when dropped on any other path. SQLite
/// never sees a read lock upgraded to a write lock, so overlapping requests
/// wait on the busy timeout instead of failing.
#[derive(Clone)]
pub struct Session(DatabaseConnection);

impl Session {
    pub fn open(db: &DatabaseConnection) -> Self {
        Self(db.clone())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.0
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::open(&state.db))
    }
}
