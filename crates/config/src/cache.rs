//! Memoization of loaded configurations.
//!
//! Responsibilities:
//! - Cache successful loads keyed by the exact `(path, encoding)` pair.
//! - Share one `Arc<Config>` instance among all callers for a given key.
//!
//! Does NOT handle:
//! - The load itself (see `loader::builder`).
//! - Eviction or reloading. A cached entry lives as long as the cache,
//!   which is intended to be owned by application startup for the lifetime
//!   of the process.
//!
//! Invariants:
//! - Write-once-per-key, read-many: after the first successful load of a
//!   key, every caller observes the same instance, even if the file has
//!   since changed on disk.
//! - Errors are not cached; a failed load is retried by the next call.
//! - The map lock is held across the populate-on-miss step so concurrent
//!   first callers do not read the file twice.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::encoding::Encoding;
use crate::loader::{ConfigError, ConfigLoader};
use crate::types::Config;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    encoding: Encoding,
}

/// Process-lifetime cache of loaded configurations.
///
/// This is an explicit object rather than hidden global state: construct
/// one at startup and pass it to whatever needs configuration access.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: Mutex<HashMap<CacheKey, Arc<Config>>>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration at `path` decoded as UTF-8, memoized.
    pub fn load(&self, path: impl Into<PathBuf>) -> Result<Arc<Config>, ConfigError> {
        self.load_with_encoding(path, Encoding::default())
    }

    /// Load the configuration at `path` with an explicit encoding, memoized.
    ///
    /// A second call with the same `(path, encoding)` returns the
    /// previously constructed instance without re-reading the file, even
    /// if the file has changed on disk. Callers needing fresh data after a
    /// file change must use a new cache; this is a documented limitation
    /// of the memoization contract, not a defect.
    pub fn load_with_encoding(
        &self,
        path: impl Into<PathBuf>,
        encoding: Encoding,
    ) -> Result<Arc<Config>, ConfigError> {
        let key = CacheKey {
            path: path.into(),
            encoding,
        };

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = entries.get(&key) {
            tracing::debug!(path = %key.path.display(), %encoding, "configuration cache hit");
            return Ok(Arc::clone(config));
        }

        // Lock held across the load: concurrent first callers for the same
        // key must not parse the file redundantly.
        let config = Arc::new(
            ConfigLoader::new(&key.path)
                .with_encoding(encoding)
                .load()?,
        );
        entries.insert(key, Arc::clone(&config));
        Ok(config)
    }

    /// Number of cached configurations.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
