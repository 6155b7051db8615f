//! Environment file loading.
//!
//! # Responsibilities
//! - Resolve which file to load: explicit override, `ENV_FILE`, or `.env`
//! - Load key/value pairs into the process environment before flags parse
//!
//! # Design Decisions
//! - The default `.env` may be absent; an explicitly-named file may not
//! - Errors are returned, never fatal here; the entry point decides

use std::env;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Variable that overrides the environment file path.
pub const ENV_FILE_VAR: &str = "ENV_FILE";

/// Conventional file name used when nothing else is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load the environment file into the process environment.
///
/// Resolution order: `explicit` (builder override) > `ENV_FILE` variable >
/// `.env`. Returns the path that was loaded, or `None` when the default file
/// simply does not exist. A missing file is only an error when it was named
/// explicitly (by either mechanism), matching fail-fast startup expectations.
pub fn load(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let (path, required) = resolve(explicit);

    if path.exists() {
        dotenv::from_path(&path).map_err(|source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    } else if required {
        Err(ConfigError::EnvFileMissing { path })
    } else {
        Ok(None)
    }
}

fn resolve(explicit: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = explicit {
        return (path.to_path_buf(), true);
    }
    match env::var(ENV_FILE_VAR) {
        Ok(value) if !value.is_empty() => (PathBuf::from(value), true),
        _ => (PathBuf::from(DEFAULT_ENV_FILE), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.env");
        let (resolved, required) = resolve(Some(&path));
        assert_eq!(resolved, path);
        assert!(required);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.env");
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFileMissing { .. }));
    }

    #[test]
    fn test_loads_values_into_process_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit.env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "SERVICE_KIT_UNIT_PROBE=loaded").unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded, Some(path));
        assert_eq!(env::var("SERVICE_KIT_UNIT_PROBE").unwrap(), "loaded");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "this is definitely not a key value pair").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }
}
