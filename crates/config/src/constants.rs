//! Centralized constants for the AuthHub workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application version reported in the configuration tree.
///
/// Sourced from the crate version at compile time, never from the
/// configuration file.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend Connection Defaults
// =============================================================================

/// Default PostgreSQL server port.
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default Redis server port.
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Default service name for S3-compatible object storage.
pub const DEFAULT_S3_SERVICE_NAME: &str = "s3";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable controlling the debug flag.
///
/// Interpreted as an integer with a non-zero test; unset means `1`.
pub const DEBUG_VAR: &str = "DEBUG";
