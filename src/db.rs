// src/db.rs

use std::time::Duration;

use sqlx::{
    AnyPool,
    any::{AnyPoolOptions, install_default_drivers},
    migrate::MigrateError,
};

use crate::config::Config;

const CONNECT_RETRIES: u32 = 5;

/// Connects the pool, retrying while the database comes up.
pub async fn connect(config: &Config) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let mut retry_count = 0;
    loop {
        match AnyPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > CONNECT_RETRIES {
                    tracing::error!("Failed to connect to database after {} retries", CONNECT_RETRIES);
                    return Err(e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

/// Applies the schema for whichever backend the pool talks to.
pub async fn run_migrations(pool: &AnyPool, sqlite: bool) -> Result<(), MigrateError> {
    if sqlite {
        sqlx::migrate!("./migrations/sqlite").run(pool).await
    } else {
        sqlx::migrate!("./migrations/postgres").run(pool).await
    }
}
