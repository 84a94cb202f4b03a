use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use std::time::Duration;

use super::config::DatabaseConfig;

/// Shared by every request. The database is the only state the service keeps.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut connection_opts = ConnectOptions::new(config.url.clone());

        connection_opts
            .sqlx_logging(true)
            .sqlx_logging_level(tracing::log::LevelFilter::Warn)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(30))
            .acquire_timeout(Duration::from_secs(30));

        Self::connect(connection_opts).await
    }

    pub async fn connect(connection_opts: ConnectOptions) -> Result<Self, DbErr> {
        let db = sea_orm::Database::connect(connection_opts).await?;

        Ok(Self { db })
    }
}
