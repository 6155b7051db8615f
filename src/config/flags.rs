//! Process flag handling.
//!
//! # Responsibilities
//! - Own the clap command the context parses at build time
//! - Let components contribute their own flags before parsing
//! - Give every flag an environment-variable fallback (`my-flag` → `MY_FLAG`)
//!
//! # Design Decisions
//! - Value precedence is CLI > environment variable > default, which is why
//!   the environment file must be loaded before `parse`
//! - `sample_env` renders one `NAME=default` line per flag so operators can
//!   seed an environment file

use std::ffi::OsString;
use std::fmt::Write as _;

use clap::{Arg, ArgMatches, Command};

use crate::config::environment::Environment;

/// Flag that selects the runtime environment.
pub const APP_ENV_FLAG: &str = "app-env";

/// Set of process flags bound to a service name.
///
/// Built once during context construction: the built-in `--app-env` flag is
/// registered first, then every component adds its own flags, then `parse`
/// runs exactly once.
#[derive(Debug)]
pub struct FlagSet {
    command: Command,
    matches: Option<ArgMatches>,
}

impl FlagSet {
    pub fn new(name: &str) -> Self {
        let command = Command::new(name.to_string()).no_binary_name(true);
        let mut set = Self {
            command,
            matches: None,
        };
        set.register(
            Arg::new(APP_ENV_FLAG)
                .long(APP_ENV_FLAG)
                .value_name("ENV")
                .default_value(Environment::Dev.as_str())
                .help("Runtime environment: dev | stg | prd"),
        );
        set
    }

    /// Register a flag, wiring up its environment-variable fallback.
    pub fn register(&mut self, arg: Arg) {
        let fallback = env_var_name(arg.get_id().as_str());
        self.command = self.command.clone().arg(arg.env(fallback));
    }

    /// Parse the given arguments (without the binary name).
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(args)?;
        self.matches = Some(matches);
        Ok(())
    }

    /// Resolved value of a flag, if it was registered and parsing has run.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.matches
            .as_ref()?
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .map(String::as_str)
    }

    /// Render a sample environment file covering every registered flag.
    pub fn sample_env(&self) -> String {
        let mut out = String::new();
        for arg in self.command.get_arguments() {
            let name = env_var_name(arg.get_id().as_str());
            let default = arg
                .get_default_values()
                .first()
                .map(|value| value.to_string_lossy().into_owned())
                .unwrap_or_default();
            let _ = writeln!(out, "{name}={default}");
        }
        out
    }
}

/// Environment variable a flag falls back to: uppercased, dashes to
/// underscores.
fn env_var_name(flag: &str) -> String {
    flag.to_uppercase().replace('-', "_")
}
