#![allow(dead_code)]

use mergington::{config::DatabaseConfig, database, state::AppState};
use sea_orm::ConnectOptions;
use std::path::PathBuf;

/// A freshly migrated and seeded in-memory database. One pooled connection,
/// since every SQLite `:memory:` connection is its own database.
pub async fn setup() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let state = AppState::connect(opts)
        .await
        .expect("failed to open in-memory database");

    database::init(&state.db)
        .await
        .expect("failed to initialize database");

    state
}

pub const CHESS_CLUB: &str = "Chess Club";
pub const NEW_STUDENT: &str = "new@mergington.edu";

/// A seeded SQLite file with a real connection pool, for tests where
/// requests overlap. The file is removed on drop.
pub struct FileDatabase {
    pub state: AppState,
    path: PathBuf,
}

impl Drop for FileDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

pub async fn setup_file(name: &str) -> FileDatabase {
    let path = std::env::temp_dir().join(format!(
        "mergington-{name}-{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 4,
        min_connections: 1,
    };

    let state = AppState::new(&config)
        .await
        .expect("failed to open database file");

    database::init(&state.db)
        .await
        .expect("failed to initialize database");

    FileDatabase { state, path }
}
