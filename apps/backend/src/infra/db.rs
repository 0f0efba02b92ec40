use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DbConfig;
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Opens a pooled connection. Does NOT run any migrations.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(config.url());
    opts.max_connections(config.max_open_connections)
        .min_connections(config.max_idle_connections.min(config.max_open_connections))
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::from(DomainError::from(e)))?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_open_connections,
        "Database connected"
    );
    Ok(conn)
}
