//! Application-level configuration types.
//!
//! Responsibilities:
//! - Define the root `Config` structure and the application metadata it
//!   carries (title, description, version, contact, JWT secrets).
//!
//! Does NOT handle:
//! - Database backend settings (see `db.rs`).
//! - Loading or validation (see the `loader` module).
//!
//! Invariants:
//! - `JwtSecrets` holds two non-empty signing secrets; the loader rejects
//!   empty values before construction.
//! - `version` comes from `constants::APP_VERSION`, never from the file.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::db::DbConfig;
use super::secret_string;

/// Descriptive contact metadata for the running service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

/// Signing secrets for the two JWT families.
///
/// Both secrets are required and non-empty; a deployment without them
/// cannot issue or validate tokens, so their absence aborts loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSecrets {
    /// Secret used to sign access tokens.
    #[serde(with = "secret_string")]
    pub access_secret_key: SecretString,
    /// Secret used to sign refresh tokens.
    #[serde(with = "secret_string")]
    pub refresh_secret_key: SecretString,
}

/// Application metadata and authentication secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Application version, fixed at compile time.
    pub version: String,
    pub jwt: JwtSecrets,
    pub contact: Contact,
}

/// Root configuration value.
///
/// Constructed once per `(path, encoding)` pair and never mutated; see
/// [`crate::ConfigCache`] for the sharing discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Debug flag, sourced from the `DEBUG` environment variable.
    /// Unset means enabled.
    pub debug: bool,
    /// Whether session cookies are marked Secure, sourced from
    /// `BASE.IS_SECURE_COOKIE` in the file.
    pub secure_cookie: bool,
    pub base: BaseConfig,
    pub db: DbConfig,
}
