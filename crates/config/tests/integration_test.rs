//! Integration tests for configuration loading.
//!
//! These tests exercise the full pipeline on real files: read, decode,
//! parse, assemble, memoize. Env-dependent tests are serialized because
//! the `DEBUG` variable is process-global.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use authhub_config::{ConfigCache, ConfigError, ConfigLoader, Encoding, constants};

/// Render a config file with each backend's `is_used` flag substituted.
fn config_text(postgres: &str, redis: &str, s3: &str) -> String {
    format!(
        "[BASE]\n\
         IS_SECURE_COOKIE=true\n\
         TITLE=Auth API\n\
         DESCRIPTION=Token issuance service\n\
         \n\
         [CONTACT]\n\
         NAME=Platform Team\n\
         URL=https://example.com/team\n\
         EMAIL=platform@example.com\n\
         \n\
         [JWT]\n\
         ACCESS_SECRET_KEY=access-secret\n\
         REFRESH_SECRET_KEY=refresh-secret\n\
         \n\
         [POSTGRESQL]\n\
         is_used={postgres}\n\
         HOST=db.internal\n\
         PORT=5433\n\
         USERNAME=app\n\
         PASSWORD=db-password\n\
         DATABASE=auth\n\
         \n\
         [REDIS]\n\
         is_used={redis}\n\
         HOST=cache.internal\n\
         PORT=6380\n\
         USERNAME=cache\n\
         PASSWORD=cache-password\n\
         \n\
         [S3]\n\
         is_used={s3}\n\
         ENDPOINT_URL=https://s3.example.com\n\
         REGION_NAME=eu-west-1\n\
         AWS_ACCESS_KEY_ID=AKIA123\n\
         AWS_SECRET_ACCESS_KEY=s3-secret\n\
         BUCKET=auth-assets\n"
    )
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.ini");
    fs::write(&path, contents).unwrap();
    path
}

/// End-to-end example from the configuration contract: PostgreSQL in use,
/// Redis and S3 disabled, `DEBUG` unset.
#[test]
#[serial]
fn test_end_to_end_example() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("1", "0", "false"));

    let config = temp_env::with_vars([("DEBUG", None::<&str>)], || {
        ConfigLoader::new(&path).load().unwrap()
    });

    assert!(config.debug, "DEBUG unset must default to true");
    assert!(config.secure_cookie);
    assert_eq!(config.base.title.as_deref(), Some("Auth API"));
    assert_eq!(config.base.version, constants::APP_VERSION);
    assert_eq!(
        config.base.jwt.access_secret_key.expose_secret(),
        "access-secret"
    );

    let postgres = config.db.postgresql.as_ref().expect("postgresql in use");
    assert_eq!(postgres.host.as_deref(), Some("db.internal"));
    assert_eq!(postgres.port, 5433);
    assert_eq!(postgres.database.as_deref(), Some("auth"));
    assert_eq!(
        postgres.password.as_ref().unwrap().expose_secret(),
        "db-password"
    );
    assert!(config.db.redis.is_none());
    assert!(config.db.s3.is_none());
}

/// Every combination of used/unused backends yields exactly the matching
/// presence in the result.
#[test]
#[serial]
fn test_all_backend_combinations() {
    let dir = TempDir::new().unwrap();

    for mask in 0u8..8 {
        let (postgres, redis, s3) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let text = config_text(
            if postgres { "yes" } else { "no" },
            if redis { "True" } else { "0" },
            if s3 { "t" } else { "" },
        );
        let path = dir.path().join(format!("combo-{mask}.ini"));
        fs::write(&path, text).unwrap();

        let config = ConfigLoader::new(&path).load().unwrap();
        assert_eq!(config.db.postgresql.is_some(), postgres, "mask {mask}");
        assert_eq!(config.db.redis.is_some(), redis, "mask {mask}");
        assert_eq!(config.db.s3.is_some(), s3, "mask {mask}");
    }
}

#[test]
#[serial]
fn test_debug_env_zero_disables() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("0", "0", "0"));

    let config = temp_env::with_vars([("DEBUG", Some("0"))], || {
        ConfigLoader::new(&path).load().unwrap()
    });
    assert!(!config.debug);
}

#[test]
#[serial]
fn test_debug_env_non_integer_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("0", "0", "0"));

    let err = temp_env::with_vars([("DEBUG", Some("maybe"))], || {
        ConfigLoader::new(&path).load().unwrap_err()
    });
    assert!(matches!(
        err,
        ConfigError::InvalidEnvVar { ref var, .. } if var == "DEBUG"
    ));
}

/// The cache returns the same instance for the same `(path, encoding)`
/// without re-reading the file, even after the file changes on disk.
#[test]
#[serial]
fn test_cache_returns_same_instance_despite_file_change() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("1", "0", "0"));

    let cache = ConfigCache::new();
    let first = cache.load(&path).unwrap();

    // Rewrite the file with different contents. The cached entry must win.
    fs::write(&path, config_text("0", "1", "0")).unwrap();

    let second = cache.load(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(second.db.postgresql.is_some());
    assert!(second.db.redis.is_none());
    assert_eq!(cache.len(), 1);
}

/// Distinct encodings of the same path are distinct cache entries.
#[test]
#[serial]
fn test_cache_keys_include_encoding() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("0", "0", "0"));

    let cache = ConfigCache::new();
    let utf8 = cache.load_with_encoding(&path, Encoding::Utf8).unwrap();
    let latin1 = cache.load_with_encoding(&path, Encoding::Latin1).unwrap();

    assert!(!Arc::ptr_eq(&utf8, &latin1));
    assert_eq!(cache.len(), 2);
}

/// Errors are not cached: a failed load is retried by the next call.
#[test]
#[serial]
fn test_cache_retries_after_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");

    let cache = ConfigCache::new();
    assert!(matches!(
        cache.load(&path).unwrap_err(),
        ConfigError::FileRead { .. }
    ));
    assert!(cache.is_empty());

    fs::write(&path, config_text("0", "0", "0")).unwrap();
    assert!(cache.load(&path).is_ok());
    assert_eq!(cache.len(), 1);
}

#[test]
#[serial]
fn test_missing_file_reports_path() {
    let missing = PathBuf::from("/nonexistent/authhub/config.ini");
    let err = ConfigLoader::new(&missing).load().unwrap_err();
    match err {
        ConfigError::FileRead { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileRead, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_missing_jwt_key_identifies_section_and_key() {
    let dir = TempDir::new().unwrap();
    let text = config_text("0", "0", "0").replace("ACCESS_SECRET_KEY=access-secret\n", "");
    let path = write_config(&dir, &text);

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingKey { ref section, ref key }
            if section == "JWT" && key == "ACCESS_SECRET_KEY"
    ));
}

#[test]
#[serial]
fn test_malformed_port_identifies_section_and_key() {
    let dir = TempDir::new().unwrap();
    let text = config_text("1", "0", "0").replace("PORT=5433", "PORT=abc");
    let path = write_config(&dir, &text);

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { ref section, ref key, .. }
            if section == "POSTGRESQL" && key == "PORT"
    ));
}

#[test]
#[serial]
fn test_syntax_error_carries_line_number() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[BASE]\nTITLE\n");

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

/// `load_dotenv()` is a no-op when disabled and when no `.env` exists.
#[test]
#[serial]
fn test_load_dotenv_disabled_gate() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &config_text("0", "0", "0"));

    let config = temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        ConfigLoader::new(&path)
            .load_dotenv()
            .unwrap()
            .load()
            .unwrap()
    });
    assert!(config.db.postgresql.is_none());
}

/// A Latin-1 file decodes under `Encoding::Latin1` and is rejected as
/// UTF-8.
#[test]
#[serial]
fn test_latin1_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    let text = config_text("0", "0", "0").replace("Platform Team", "Op\u{e9}rations");
    let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
    fs::write(&path, bytes).unwrap();

    let config = ConfigLoader::new(&path)
        .with_encoding(Encoding::Latin1)
        .load()
        .unwrap();
    assert_eq!(
        config.base.contact.name.as_deref(),
        Some("Op\u{e9}rations")
    );

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Decode { encoding: Encoding::Utf8, .. }
    ));
}
