//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide conversion from lower-level errors (e.g., IniError).
//!
//! Does NOT handle:
//! - INI parsing itself (see the `ini` module).
//!
//! Invariants:
//! - All variants include context for fixing the file (section and key
//!   names, paths, line numbers).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::Encoding;
use crate::ini::IniError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file is missing or unreadable.
    #[error("failed to read config file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file bytes are not valid for the selected encoding.
    #[error("config file at {path} is not valid {encoding} text")]
    Decode { path: PathBuf, encoding: Encoding },

    /// The file is not well-formed INI.
    #[error("invalid INI in config file: {0}")]
    Ini(#[from] IniError),

    #[error("missing required section [{section}] in config file")]
    MissingSection { section: String },

    #[error("missing required key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    /// A file value failed integer/boolean coercion or a non-empty
    /// requirement.
    #[error("invalid value for {section}.{key}: {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    #[error("invalid value for environment variable {var}: {message}")]
    InvalidEnvVar { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse
    /// failure, NOT the offending line content, to prevent leaking secrets.
    #[error("failed to parse .env file at position {error_index}")]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file")]
    DotenvUnknown,
}
