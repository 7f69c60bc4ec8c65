//! Database backend configuration types.
//!
//! Responsibilities:
//! - Define connection settings for the optional backends: PostgreSQL
//!   (relational store), Redis (cache), S3 (object storage).
//! - Group them under `DbConfig`, where presence means "this deployment
//!   uses the backend".
//!
//! Does NOT handle:
//! - Deciding presence from `is_used` flags (see `loader::sections`).
//! - Opening actual connections (downstream crates own their clients).
//!
//! Invariants:
//! - Passwords and access keys use `secrecy::SecretString`.
//! - Port defaults come from `constants`, not inline magic numbers.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::secret_string_opt;
use crate::constants::{DEFAULT_POSTGRES_PORT, DEFAULT_REDIS_PORT, DEFAULT_S3_SERVICE_NAME};

/// Relational store connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub database: Option<String>,
    pub username: Option<String>,
    #[serde(with = "secret_string_opt")]
    pub password: Option<SecretString>,
    pub host: Option<String>,
    pub port: u16,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database: None,
            username: None,
            password: None,
            host: None,
            port: DEFAULT_POSTGRES_PORT,
        }
    }
}

/// Cache backend connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    #[serde(with = "secret_string_opt")]
    pub password: Option<SecretString>,
    pub port: u16,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            port: DEFAULT_REDIS_PORT,
        }
    }
}

/// Object storage connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    pub bucket: Option<String>,
    pub endpoint_url: Option<String>,
    pub region_name: Option<String>,
    pub access_key_id: Option<String>,
    #[serde(with = "secret_string_opt")]
    pub secret_access_key: Option<SecretString>,
    /// Service name passed to S3-compatible SDKs. Not read from the file.
    pub service_name: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: None,
            endpoint_url: None,
            region_name: None,
            access_key_id: None,
            secret_access_key: None,
            service_name: DEFAULT_S3_SERVICE_NAME.to_string(),
        }
    }
}

/// The set of backends this deployment actually uses.
///
/// Each field is `Some` iff the corresponding section's `is_used` flag was
/// truthy when the configuration was loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DbConfig {
    pub postgresql: Option<PostgresConfig>,
    pub redis: Option<RedisConfig>,
    pub s3: Option<S3Config>,
}
