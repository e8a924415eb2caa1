/**
 * Server Configuration
 *
 * This module handles loading server configuration from environment
 * variables (optionally seeded from a `.env` file) and opening the
 * optional PostgreSQL connection pool.
 *
 * # Variables
 *
 * - `DATABASE_URL` - Postgres URL; when absent the server runs on in-memory stores
 * - `JWT_SECRET` - HMAC secret for session tokens
 * - `TOKEN_TTL_DAYS` - token lifetime in days (default 30)
 * - `BCRYPT_COST` - bcrypt work factor (default `bcrypt::DEFAULT_COST`)
 * - `SERVER_PORT` - listen port (default 3000)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Invalid numbers fall back to their defaults and an unreachable database
 * falls back to in-memory storage.
 */

use sqlx::PgPool;
use std::str::FromStr;

/// Secret used when `JWT_SECRET` is not set
const DEVELOPMENT_JWT_SECRET: &str = "tostar-development-secret-change-me";

const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

const DEFAULT_PORT: u16 = 3000;

/// Token and password hashing settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for HS256 tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_DAYS * SECONDS_PER_DAY,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn with_token_ttl_secs(mut self, secs: i64) -> Self {
        self.token_ttl_secs = secs;
        self
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set. Using an insecure development secret.");
            DEVELOPMENT_JWT_SECRET.to_string()
        });

        let ttl_days: i64 = env_or("TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS);
        let bcrypt_cost: u32 = env_or("BCRYPT_COST", bcrypt::DEFAULT_COST);
        let port: u16 = env_or("SERVER_PORT", DEFAULT_PORT);

        Self {
            database_url,
            port,
            auth: AuthConfig::new(jwt_secret)
                .with_token_ttl_secs(ttl_days_to_secs(ttl_days))
                .with_bcrypt_cost(bcrypt_cost),
        }
    }
}

/// Parse an environment variable, falling back to `default` when it is
/// missing or malformed
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}. Using default {}.", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}

/// Convert a token lifetime in days to seconds
///
/// A day count too large for `i64` seconds falls back to the default
/// lifetime.
fn ttl_days_to_secs(days: i64) -> i64 {
    days.checked_mul(SECONDS_PER_DAY).unwrap_or_else(|| {
        tracing::warn!(
            "TOKEN_TTL_DAYS {} is out of range. Using default {}.",
            days,
            DEFAULT_TOKEN_TTL_DAYS
        );
        DEFAULT_TOKEN_TTL_DAYS * SECONDS_PER_DAY
    })
}

/// Open the database connection pool and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is configured and reachable
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Falling back to in-memory storage.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory storage.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
