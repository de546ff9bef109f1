use std::env;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/makedeveloper";
pub const DEFAULT_PORT: u16 = 4500;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Private key not set")]
    MissingJwtSecret,
}

/// Process configuration, loaded once at startup and passed into
/// [`crate::state::AppState`] rather than read from ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HMAC secret used to verify Bearer tokens. Required.
    pub jwt_secret: String,
    /// Postgres connection string.
    pub database_url: String,
    /// Listening port for the HTTP server.
    pub port: u16,
    /// Upper bound on the Postgres connection pool.
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// | Env Var                    | Required | Default                               |
    /// |----------------------------|----------|---------------------------------------|
    /// | `JWT_PRIVATE_KEY`          | **yes**  | --                                    |
    /// | `DATABASE_URL`             | no       | `postgres://localhost/makedeveloper`  |
    /// | `PORT`                     | no       | `4500`                                |
    /// | `DATABASE_MAX_CONNECTIONS` | no       | `10`                                  |
    ///
    /// A missing or empty `JWT_PRIVATE_KEY` is a startup error; the caller is
    /// expected to treat it as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_PRIVATE_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            jwt_secret,
            database_url,
            port,
            max_connections,
        })
    }
}
