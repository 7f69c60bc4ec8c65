//! Configuration loader for INI files and environment variables.
//!
//! Responsibilities:
//! - Load configuration from an INI-format file plus selected environment
//!   variables and assemble the immutable `Config` tree.
//! - Provide an explicit `load_dotenv()` opt-in for `.env` preloading.
//!
//! Does NOT handle:
//! - Memoization of loaded configurations (see the `cache` module).
//! - INI syntax itself (see the `ini` module).
//!
//! Invariants / Assumptions:
//! - Loading either fully succeeds or fails before any partial value is
//!   observable.
//! - A backend sub-config is built iff its section's `is_used` flag is
//!   truthy; falsy flags skip the section's remaining keys entirely.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.

mod builder;
mod env;
mod error;
mod sections;
mod truthy;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use truthy::is_truthy;
