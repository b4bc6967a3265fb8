use crate::config::AppConfig;
use color_eyre::Result;
use sqlx::{migrate::MigrateDatabase, query, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use tracing::{debug, error, info};

/// Creates the `documents` table and its indexes if they don't exist.
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    query(
        "CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL,
            created TEXT NOT NULL,
            updated TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        )",
    )
    .execute(pool)
    .await?;

    query("CREATE INDEX IF NOT EXISTS documents_by_created ON documents (collection, created)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Opens (creating if needed) the database named in the config and prepares the schema.
pub async fn create_database_pool(config: &AppConfig) -> Result<SqlitePool> {
    let database_url = &config.database_url;
    info!(%database_url, "Initializing database");

    if let Some(parent) = config.database_path.parent() {
        if !parent.exists() {
            debug!(dir = %parent.display(), "Creating database directory");
            std::fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create directory: {e}");
                color_eyre::eyre::eyre!("Failed to create database directory: {e}")
            })?;
        }
    }

    let db_exists = Sqlite::database_exists(database_url).await.map_err(|e| {
        error!("Error checking if database exists: {e}");
        color_eyre::eyre::eyre!("Error checking database: {e}")
    })?;

    if !db_exists {
        info!("Database does not exist, creating it now");
        Sqlite::create_database(database_url).await.map_err(|e| {
            error!("Failed to create database: {e}");
            color_eyre::eyre::eyre!("Failed to create SQLite database: {e}")
        })?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA journal_mode = WAL;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            color_eyre::eyre::eyre!("Failed to connect to SQLite database: {e}")
        })?;

    setup_database(&pool).await.map_err(|e| {
        error!("Failed to set up database schema: {e}");
        color_eyre::eyre::eyre!("Failed to set up database schema: {e}")
    })?;

    info!("Database initialization completed");
    Ok(pool)
}

/// Pool for an explicit URL, e.g. `sqlite::memory:` in tests.
pub async fn create_database_pool_with_url(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}
