use anyhow::{Result, anyhow};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(50) NOT NULL UNIQUE,
    password TEXT NOT NULL
)
"#;

/// Opens the database at `url`, creating the file if needed, and makes sure
/// the `user` table exists.
///
/// `sqlite::memory:` databases live per connection, so callers using one
/// should keep `max_connections` at 1.
pub async fn open_pool(url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| anyhow!("invalid store url {url:?}: {e}"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_USER_TABLE).execute(&pool).await?;

    Ok(pool)
}
