//! Configuration management for AuthHub.
//!
//! This crate provides types and loaders for materializing the application
//! configuration from an INI-format file and process environment variables.
//! Loads are memoized per `(path, encoding)` by [`ConfigCache`].

mod cache;
pub mod constants;
mod encoding;
mod ini;
mod loader;
pub mod types;

pub use cache::ConfigCache;
pub use encoding::{Encoding, UnknownEncoding};
pub use ini::{IniDocument, IniError, IniSection};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none, is_truthy};
pub use types::{
    BaseConfig, Config, Contact, DbConfig, JwtSecrets, PostgresConfig, RedisConfig, S3Config,
};
