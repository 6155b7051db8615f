//! Context construction.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::flags::APP_ENV_FLAG;
use crate::config::{env_file, Environment, FlagSet};
use crate::context::component::Component;
use crate::context::registry::ComponentRegistry;
use crate::context::service::{ContextError, LifecycleState, ServiceContext};
use crate::observability::{LogProvider, LoggingComponent};

/// Builder for [`ServiceContext`].
///
/// ```no_run
/// # use std::sync::Arc;
/// # use service_kit::ServiceContext;
/// # fn component() -> Arc<dyn service_kit::Component> { unimplemented!() }
/// let ctx = ServiceContext::builder()
///     .name("worker")
///     .component(component())
///     .build()?;
/// # Ok::<(), service_kit::ContextError>(())
/// ```
pub struct ContextBuilder {
    name: String,
    components: Vec<Arc<dyn Component>>,
    args: Option<Vec<OsString>>,
    env_file: Option<PathBuf>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            components: Vec::new(),
            args: None,
            env_file: None,
        }
    }

    /// Process name; used as the flag set name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Register a component. A second component with an already-registered
    /// id is silently ignored; the first wins.
    pub fn component(mut self, component: Arc<dyn Component>) -> Self {
        self.components.push(component);
        self
    }

    /// Arguments to parse instead of the process arguments.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Environment file to load, taking precedence over `ENV_FILE`.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Assemble the context. No component is activated yet.
    pub fn build(self) -> Result<ServiceContext, ContextError> {
        let mut registry = ComponentRegistry::new();
        registry.insert(Arc::new(LoggingComponent::new()));
        for component in self.components {
            registry.insert(component);
        }

        let mut flags = FlagSet::new(&self.name);
        for component in registry.components() {
            component.init_flags(&mut flags);
        }

        // Flags fall back to environment variables, so the env file must be
        // in the process environment before parsing.
        env_file::load(self.env_file.as_deref()).map_err(ContextError::Config)?;

        let args = self
            .args
            .unwrap_or_else(|| env::args_os().skip(1).collect());
        flags
            .parse(args)
            .map_err(|err| ContextError::Config(err.into()))?;

        let environment = flags
            .get(APP_ENV_FLAG)
            .unwrap_or(Environment::Dev.as_str())
            .parse::<Environment>()
            .map_err(ContextError::Config)?;

        let log_provider = LogProvider::new();
        let logger = log_provider.logger("service-context");

        Ok(ServiceContext {
            name: self.name,
            environment,
            registry,
            flags,
            log_provider,
            logger,
            state: LifecycleState::Constructed,
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
