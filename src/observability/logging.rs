//! Structured logging.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Arg;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, FlagSet};
use crate::context::{Component, ComponentError, ServiceContext};

/// Id the built-in logging component registers under.
pub const LOGGING_COMPONENT_ID: &str = "logger";

/// Flag controlling the default log filter.
pub const LOG_LEVEL_FLAG: &str = "log-level";

/// Mints prefix-scoped [`Logger`] handles and installs the subscriber.
///
/// Owned by the [`ServiceContext`]; passed by reference wherever named
/// logging is needed instead of living in process-global state.
#[derive(Debug, Clone, Default)]
pub struct LogProvider;

impl LogProvider {
    pub fn new() -> Self {
        Self
    }

    /// A logger whose events carry `component = prefix`.
    pub fn logger(&self, prefix: &str) -> Logger {
        Logger {
            prefix: Arc::from(prefix),
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the `filter` directive when set. Production gets
    /// JSON output for machine parsing; everything else stays human-readable.
    /// If a subscriber is already installed (tests, embedding applications),
    /// the existing one is left in place.
    pub fn install(&self, filter: &str, environment: Environment) {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

        let result = if environment.is_prod() {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
        };

        // An earlier subscriber wins; nothing to do here.
        let _ = result;
    }
}

/// Named logger bound to a component prefix.
#[derive(Debug, Clone)]
pub struct Logger {
    prefix: Arc<str>,
}

impl Logger {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn debug(&self, message: impl fmt::Display) {
        tracing::debug!(component = %self.prefix, "{}", message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        tracing::info!(component = %self.prefix, "{}", message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        tracing::warn!(component = %self.prefix, "{}", message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        tracing::error!(component = %self.prefix, "{}", message);
    }
}

/// Built-in component that installs the tracing subscriber.
///
/// Always registered first so every later component activates with logging
/// available.
#[derive(Debug, Default)]
pub struct LoggingComponent;

impl LoggingComponent {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Component for LoggingComponent {
    fn id(&self) -> &str {
        LOGGING_COMPONENT_ID
    }

    fn init_flags(&self, flags: &mut FlagSet) {
        flags.register(
            Arg::new(LOG_LEVEL_FLAG)
                .long(LOG_LEVEL_FLAG)
                .value_name("FILTER")
                .default_value("info")
                .help("Log filter directive, e.g. info or service_kit=debug"),
        );
    }

    async fn activate(&self, ctx: &ServiceContext) -> Result<(), ComponentError> {
        let filter = ctx.flag(LOG_LEVEL_FLAG).unwrap_or("info");
        ctx.log_provider().install(filter, ctx.environment());
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
