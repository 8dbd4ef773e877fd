//! Database infrastructure - connection bootstrap and migrations.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Connect to the configured database and bring the schema up to date.
///
/// Single entrypoint: build + migrate.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let mut opts = ConnectOptions::new(url);
    match kind {
        DbKind::SqliteMemory => {
            // A pooled in-memory SQLite is a fresh database per connection;
            // pin the pool to one connection so every query sees the same
            // schema.
            opts.max_connections(1).min_connections(1);
        }
        DbKind::Postgres(_) => {
            opts.max_connections(10);
        }
    }
    opts.sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))?;

    Migrator::up(&conn, None).await?;
    info!(db = ?kind, "database connected and migrated");
    Ok(conn)
}
