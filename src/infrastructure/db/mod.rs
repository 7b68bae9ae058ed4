use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod repositories;

pub type PgPool = Pool<Postgres>;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = pool_options(max_connections).connect(database_url).await?;
    Ok(pool)
}

/// Applies the embedded `./migrations` set.
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Opens the pool and brings the schema up to date before any repository uses it.
pub async fn connect_and_migrate(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = connect_pool(database_url, max_connections).await?;
    migrate(&pool).await?;
    tracing::info!(max_connections = pool.options().get_max_connections(), "database_ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_at_least_one() {
        assert_eq!(pool_options(0).get_max_connections(), 1);
        assert_eq!(pool_options(25).get_max_connections(), 25);
        assert_eq!(pool_options(4).get_acquire_timeout(), ACQUIRE_TIMEOUT);
    }
}
