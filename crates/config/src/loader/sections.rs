//! Section-to-struct assembly for the configuration file.
//!
//! Responsibilities:
//! - Map the required INI sections (BASE, CONTACT, JWT, POSTGRESQL, REDIS,
//!   S3) onto the typed configuration structs.
//! - Enforce key presence, integer coercion for ports, and the non-empty
//!   requirement for JWT secrets.
//!
//! Does NOT handle:
//! - INI syntax (see the `ini` module).
//! - Environment variables (see `env.rs`).
//!
//! Invariants:
//! - All six sections must exist, even for backends that are not in use.
//! - A backend struct is built iff its `is_used` flag is truthy; a falsy
//!   flag skips the section's remaining keys entirely.
//! - String keys of an in-use backend are presence-required; `PORT` falls
//!   back to the documented default when absent.

use secrecy::SecretString;

use super::error::ConfigError;
use super::truthy::is_truthy;
use crate::constants::{APP_VERSION, DEFAULT_POSTGRES_PORT, DEFAULT_REDIS_PORT};
use crate::ini::{IniDocument, IniSection};
use crate::types::{
    BaseConfig, Contact, DbConfig, JwtSecrets, PostgresConfig, RedisConfig, S3Config,
};

const SECTION_BASE: &str = "BASE";
const SECTION_CONTACT: &str = "CONTACT";
const SECTION_JWT: &str = "JWT";
const SECTION_POSTGRESQL: &str = "POSTGRESQL";
const SECTION_REDIS: &str = "REDIS";
const SECTION_S3: &str = "S3";

fn require_section<'a>(doc: &'a IniDocument, name: &str) -> Result<&'a IniSection, ConfigError> {
    doc.section(name).ok_or_else(|| ConfigError::MissingSection {
        section: name.to_string(),
    })
}

fn require_key<'a>(
    section_name: &str,
    section: &'a IniSection,
    key: &str,
) -> Result<&'a str, ConfigError> {
    section.get(key).ok_or_else(|| ConfigError::MissingKey {
        section: section_name.to_string(),
        key: key.to_string(),
    })
}

fn require_string(
    section_name: &str,
    section: &IniSection,
    key: &str,
) -> Result<Option<String>, ConfigError> {
    require_key(section_name, section, key).map(|value| Some(value.to_string()))
}

fn require_secret(
    section_name: &str,
    section: &IniSection,
    key: &str,
) -> Result<Option<SecretString>, ConfigError> {
    let value = require_key(section_name, section, key)?;
    Ok(Some(SecretString::new(value.to_string().into())))
}

/// Parse `PORT` if present, otherwise use the backend's documented default.
fn port_or_default(
    section_name: &str,
    section: &IniSection,
    default: u16,
) -> Result<u16, ConfigError> {
    match section.get("PORT") {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            section: section_name.to_string(),
            key: "PORT".to_string(),
            message: format!("expected an integer port, got '{raw}'"),
        }),
    }
}

/// A JWT signing secret must be present and non-empty.
fn require_nonempty_secret(
    section_name: &str,
    section: &IniSection,
    key: &str,
) -> Result<SecretString, ConfigError> {
    let value = require_key(section_name, section, key)?;
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section_name.to_string(),
            key: key.to_string(),
            message: "must be non-empty".to_string(),
        });
    }
    Ok(SecretString::new(value.to_string().into()))
}

/// Evaluate a backend section's `is_used` flag.
fn backend_in_use(section_name: &str, section: &IniSection) -> Result<bool, ConfigError> {
    let flag = require_key(section_name, section, "is_used")?;
    Ok(is_truthy(flag))
}

pub(crate) fn secure_cookie_flag(doc: &IniDocument) -> Result<bool, ConfigError> {
    let base = require_section(doc, SECTION_BASE)?;
    let flag = require_key(SECTION_BASE, base, "IS_SECURE_COOKIE")?;
    Ok(is_truthy(flag))
}

pub(crate) fn base_config(doc: &IniDocument) -> Result<BaseConfig, ConfigError> {
    let base = require_section(doc, SECTION_BASE)?;
    let contact = require_section(doc, SECTION_CONTACT)?;
    let jwt = require_section(doc, SECTION_JWT)?;

    Ok(BaseConfig {
        title: require_string(SECTION_BASE, base, "TITLE")?,
        description: require_string(SECTION_BASE, base, "DESCRIPTION")?,
        version: APP_VERSION.to_string(),
        jwt: JwtSecrets {
            access_secret_key: require_nonempty_secret(SECTION_JWT, jwt, "ACCESS_SECRET_KEY")?,
            refresh_secret_key: require_nonempty_secret(SECTION_JWT, jwt, "REFRESH_SECRET_KEY")?,
        },
        contact: Contact {
            name: require_string(SECTION_CONTACT, contact, "NAME")?,
            url: require_string(SECTION_CONTACT, contact, "URL")?,
            email: require_string(SECTION_CONTACT, contact, "EMAIL")?,
        },
    })
}

pub(crate) fn db_config(doc: &IniDocument) -> Result<DbConfig, ConfigError> {
    let postgresql = require_section(doc, SECTION_POSTGRESQL)?;
    let redis = require_section(doc, SECTION_REDIS)?;
    let s3 = require_section(doc, SECTION_S3)?;

    Ok(DbConfig {
        postgresql: backend_in_use(SECTION_POSTGRESQL, postgresql)?
            .then(|| postgres_config(postgresql))
            .transpose()?,
        redis: backend_in_use(SECTION_REDIS, redis)?
            .then(|| redis_config(redis))
            .transpose()?,
        s3: backend_in_use(SECTION_S3, s3)?
            .then(|| s3_config(s3))
            .transpose()?,
    })
}

fn postgres_config(section: &IniSection) -> Result<PostgresConfig, ConfigError> {
    Ok(PostgresConfig {
        database: require_string(SECTION_POSTGRESQL, section, "DATABASE")?,
        username: require_string(SECTION_POSTGRESQL, section, "USERNAME")?,
        password: require_secret(SECTION_POSTGRESQL, section, "PASSWORD")?,
        host: require_string(SECTION_POSTGRESQL, section, "HOST")?,
        port: port_or_default(SECTION_POSTGRESQL, section, DEFAULT_POSTGRES_PORT)?,
    })
}

fn redis_config(section: &IniSection) -> Result<RedisConfig, ConfigError> {
    Ok(RedisConfig {
        host: require_string(SECTION_REDIS, section, "HOST")?,
        username: require_string(SECTION_REDIS, section, "USERNAME")?,
        password: require_secret(SECTION_REDIS, section, "PASSWORD")?,
        port: port_or_default(SECTION_REDIS, section, DEFAULT_REDIS_PORT)?,
    })
}

fn s3_config(section: &IniSection) -> Result<S3Config, ConfigError> {
    Ok(S3Config {
        bucket: require_string(SECTION_S3, section, "BUCKET")?,
        endpoint_url: require_string(SECTION_S3, section, "ENDPOINT_URL")?,
        region_name: require_string(SECTION_S3, section, "REGION_NAME")?,
        access_key_id: require_string(SECTION_S3, section, "AWS_ACCESS_KEY_ID")?,
        secret_access_key: require_secret(SECTION_S3, section, "AWS_SECRET_ACCESS_KEY")?,
        ..S3Config::default()
    })
}
