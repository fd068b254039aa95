// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
}

impl Config {
    /// Reads configuration from the process environment (and `.env` if present).
    ///
    /// `DATABASE_URL` wins when set. Otherwise a Postgres URL is assembled from
    /// `DB_USER`, `DB_PASSWORD`, `DB_HOST` and `DB_NAME`; the credentials are required.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let user = env::var("DB_USER")?;
                let password = env::var("DB_PASSWORD")?;
                let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost:5432".to_string());
                let name = env::var("DB_NAME").unwrap_or_else(|_| "trivia".to_string());
                format!("postgresql://{}:{}@{}/{}", user, password, host, name)
            }
        };

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            database_url,
            db_max_connections,
            host,
            port,
            rust_log,
            log_dir,
        })
    }

    /// True when the connection string points at SQLite rather than Postgres.
    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }
}
