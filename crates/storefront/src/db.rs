//! Database pool for the session store.
//!
//! The storefront keeps no data of its own; `PostgreSQL` only backs
//! tower-sessions (the durable per-visitor storage holding cart and
//! preferences).

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create the connection pool for the session store.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
