//! Configuration type definitions for AuthHub.
//!
//! Responsibilities:
//! - Define the immutable configuration tree (application metadata, JWT
//!   secrets, optional database backends).
//! - Provide serialization helpers for sensitive values.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see the
//!   `loader` module).
//! - Memoization of loaded configurations (see the `cache` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental
//!   logging through `Debug`.
//! - Values are constructed once by the loader and never mutated.
//! - A backend sub-config is present iff its section's `is_used` flag was
//!   truthy in the source file.

mod base;
mod db;

pub use base::{BaseConfig, Config, Contact, JwtSecrets};
pub use db::{DbConfig, PostgresConfig, RedisConfig, S3Config};

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing `Option<SecretString>` as optional strings.
pub(crate) mod secret_string_opt {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}
