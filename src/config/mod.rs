//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment file (.env or $ENV_FILE)
//!     → env_file.rs (resolve path, load into process environment)
//! process flags
//!     → flags.rs (clap command; CLI value > env var > default)
//!     → environment.rs (--app-env → Environment)
//!     → ServiceContext (immutable after build)
//! ```
//!
//! # Design Decisions
//! - Flag values fall back to environment variables, so the env file loads
//!   before flags are parsed
//! - A missing default `.env` is not an error; a missing explicitly-named
//!   file is
//! - Configuration failures are returned to the caller; only the binary
//!   entry point may terminate the process

pub mod env_file;
pub mod environment;
pub mod flags;

pub use environment::Environment;
pub use flags::FlagSet;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment file exists but could not be loaded.
    #[error("loading environment file {path:?}: {source}")]
    EnvFile {
        path: PathBuf,
        source: dotenv::Error,
    },

    /// An explicitly-named environment file does not exist.
    #[error("environment file {path:?} does not exist")]
    EnvFileMissing { path: PathBuf },

    /// The `--app-env` value is not a known environment.
    #[error("unknown environment {0:?} (expected dev | stg | prd)")]
    InvalidEnvironment(String),

    /// Flag parsing failed.
    #[error("parsing flags: {0}")]
    Flags(#[from] clap::Error),
}
