//! Configuration loader implementation.
//!
//! Responsibilities:
//! - Read and decode the configuration file, parse it as INI, and assemble
//!   the final `Config` from the file plus environment variables.
//! - Provide an explicit `load_dotenv()` opt-in for `.env` preloading.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Section-to-struct mapping (delegated to sections.rs).
//! - Memoization across calls (see the `cache` module).
//!
//! Invariants / Assumptions:
//! - One synchronous pass: read, decode, parse, assemble. No partial
//!   `Config` is observable on failure.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.

use std::path::{Path, PathBuf};

use super::env::debug_flag;
use super::error::ConfigError;
use super::sections;
use crate::encoding::Encoding;
use crate::ini::IniDocument;
use crate::types::Config;

/// Loads the configuration file at a fixed path and encoding.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    encoding: Encoding,
}

impl ConfigLoader {
    /// Create a loader for the file at `path`, decoded as UTF-8.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: Encoding::default(),
        }
    }

    /// Set the text encoding used to decode the file.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to
    /// prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Load and assemble the configuration.
    ///
    /// Every call re-reads the file; memoization across calls lives in
    /// [`crate::ConfigCache`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        let bytes = std::fs::read(&self.path).map_err(|source| ConfigError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let text = self
            .encoding
            .decode(&bytes)
            .ok_or_else(|| ConfigError::Decode {
                path: self.path.clone(),
                encoding: self.encoding,
            })?;
        let doc = IniDocument::parse(&text)?;

        let config = Config {
            debug: debug_flag()?,
            secure_cookie: sections::secure_cookie_flag(&doc)?,
            base: sections::base_config(&doc)?,
            db: sections::db_config(&doc)?,
        };

        tracing::debug!(
            path = %self.path.display(),
            debug = config.debug,
            postgresql = config.db.postgresql.is_some(),
            redis = config.db.redis.is_some(),
            s3 = config.db.s3.is_some(),
            "loaded configuration"
        );

        Ok(config)
    }
}
