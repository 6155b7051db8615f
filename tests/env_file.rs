//! Environment file integration tests.
//!
//! `ENV_FILE` is process-global, so everything touching it lives in a single
//! test function; the other tests use explicit file overrides.

use std::io::Write;
use std::sync::Arc;

use service_kit::{ConfigError, ContextError, ServiceContext};

mod common;
use common::FlaggedProbe;

fn no_args() -> Vec<String> {
    Vec::new()
}

fn write_env_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{contents}").unwrap();
    path
}

#[test]
fn test_explicit_env_file_feeds_flag_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(&dir, "flags.env", "FILE_TOKEN=token-file\n");

    let ctx = ServiceContext::builder()
        .name("env-file-test")
        .args(no_args())
        .env_file(&path)
        .component(Arc::new(FlaggedProbe::new(
            "flagged",
            "file-token",
            "token-default",
        )))
        .build()
        .unwrap();
    assert_eq!(ctx.flag("file-token"), Some("token-file"));

    // CLI still wins over the file-provided environment value.
    let ctx = ServiceContext::builder()
        .name("env-file-test")
        .args(["--file-token", "token-cli"])
        .env_file(&path)
        .component(Arc::new(FlaggedProbe::new(
            "flagged",
            "file-token",
            "token-default",
        )))
        .build()
        .unwrap();
    assert_eq!(ctx.flag("file-token"), Some("token-cli"));
}

#[test]
fn test_explicit_missing_env_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.env");

    let err = ServiceContext::builder()
        .name("missing-env-test")
        .args(no_args())
        .env_file(&missing)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::Config(ConfigError::EnvFileMissing { .. })
    ));
}

#[test]
fn test_malformed_env_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(&dir, "broken.env", "this is definitely not a key value pair\n");

    let err = ServiceContext::builder()
        .name("broken-env-test")
        .args(no_args())
        .env_file(&path)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::Config(ConfigError::EnvFile { .. })
    ));
}

#[test]
fn test_env_file_variable_resolution() {
    // No override and no .env in the working directory: fine.
    ServiceContext::builder()
        .name("no-env-test")
        .args(no_args())
        .build()
        .unwrap();

    // ENV_FILE naming a missing file is a construction error.
    std::env::set_var("ENV_FILE", "/definitely/not/here.env");
    let err = ServiceContext::builder()
        .name("var-missing-test")
        .args(no_args())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::Config(ConfigError::EnvFileMissing { .. })
    ));

    // ENV_FILE naming a real file loads it.
    let dir = tempfile::tempdir().unwrap();
    let path = write_env_file(&dir, "var.env", "ENV_FILE_VAR_PROBE=visible\n");
    std::env::set_var("ENV_FILE", &path);
    ServiceContext::builder()
        .name("var-present-test")
        .args(no_args())
        .build()
        .unwrap();
    assert_eq!(std::env::var("ENV_FILE_VAR_PROBE").unwrap(), "visible");

    std::env::remove_var("ENV_FILE");
}
