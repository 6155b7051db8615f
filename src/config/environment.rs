//! Runtime environment names.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Deployment environment the process runs in.
///
/// Parsed from the `--app-env` flag (or its `APP_ENV` fallback). The short
/// forms `dev | stg | prd` are canonical; the long names are accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Canonical short name, as written in flags and sample env files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "stg",
            Environment::Prod => "prd",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Environment::Prod)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dev" | "development" => Ok(Environment::Dev),
            "stg" | "staging" => Ok(Environment::Staging),
            "prd" | "prod" | "production" => Ok(Environment::Prod),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}
