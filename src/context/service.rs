//! The service context.
//!
//! # Responsibilities
//! - Own the component registry and parsed configuration
//! - Activate and stop components in registration order
//! - Hand out prefix-scoped loggers and component lookups
//!
//! # Design Decisions
//! - Lifecycle state is tracked explicitly; double `load`, double `stop`,
//!   and `stop` before `load` fail fast instead of re-running hooks
//! - The first failing hook aborts the pass and is reported with the
//!   component id; later components are untouched and nothing rolls back

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, Environment, FlagSet};
use crate::context::builder::ContextBuilder;
use crate::context::component::{Component, ComponentError};
use crate::context::registry::ComponentRegistry;
use crate::observability::{LogProvider, Logger};

/// Errors raised by context construction and lifecycle passes.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A component's `activate` hook failed.
    #[error("activating component {id:?}: {error}")]
    Activation { id: String, error: ComponentError },

    /// A component's `stop` hook failed.
    #[error("stopping component {id:?}: {error}")]
    Shutdown { id: String, error: ComponentError },

    /// `load` was called on a context that already loaded.
    #[error("service context is already loaded")]
    AlreadyLoaded,

    /// `stop` was called on a context that is not loaded.
    #[error("service context is not loaded")]
    NotLoaded,
}

/// Where the context sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Built, nothing activated yet.
    Constructed,
    /// Every component activated.
    Loaded,
    /// Every component stopped.
    Stopped,
}

/// Owns the ordered component registry and sequences their lifecycles.
#[derive(Debug)]
pub struct ServiceContext {
    pub(crate) name: String,
    pub(crate) environment: Environment,
    pub(crate) registry: ComponentRegistry,
    pub(crate) flags: FlagSet,
    pub(crate) log_provider: LogProvider,
    pub(crate) logger: Logger,
    pub(crate) state: LifecycleState,
}

impl ServiceContext {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Process name the flag set was bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Component registered under `id`, if any. Constant time.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Component>> {
        self.registry.get(id).cloned()
    }

    /// Component registered under `id`, panicking when absent.
    ///
    /// Fail-fast startup helper; steady-state code should use [`Self::get`].
    pub fn must_get(&self, id: &str) -> Arc<dyn Component> {
        match self.get(id) {
            Some(component) => component,
            None => panic!("component {id:?} is not registered"),
        }
    }

    /// Registered component ids, in activation order.
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.registry.ids()
    }

    /// Resolved value of a flag registered during construction.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name)
    }

    /// Sample environment file covering every registered flag.
    pub fn sample_env(&self) -> String {
        self.flags.sample_env()
    }

    /// A logger scoped to `prefix`, usable in any lifecycle state.
    pub fn logger(&self, prefix: &str) -> Logger {
        self.log_provider.logger(prefix)
    }

    pub fn log_provider(&self) -> &LogProvider {
        &self.log_provider
    }

    /// Activate every component, strictly in registration order.
    ///
    /// The context itself is the dependency-lookup surface handed to each
    /// hook. Stops at the first failure; already-activated components stay
    /// active and the state remains [`LifecycleState::Constructed`].
    pub async fn load(&mut self) -> Result<(), ContextError> {
        if self.state != LifecycleState::Constructed {
            return Err(ContextError::AlreadyLoaded);
        }

        self.logger
            .info(format!("loading {} components", self.registry.len()));

        let components: Vec<Arc<dyn Component>> = self.registry.components().cloned().collect();
        for component in components {
            component
                .activate(&*self)
                .await
                .map_err(|error| ContextError::Activation {
                    id: component.id().to_string(),
                    error,
                })?;
        }

        self.state = LifecycleState::Loaded;
        self.logger.info("service context loaded");
        Ok(())
    }

    /// Stop every component, in registration order.
    ///
    /// Stops at the first failure; later components keep running and the
    /// state remains [`LifecycleState::Loaded`].
    pub async fn stop(&mut self) -> Result<(), ContextError> {
        if self.state != LifecycleState::Loaded {
            return Err(ContextError::NotLoaded);
        }

        self.logger.info("stopping service context");

        let components: Vec<Arc<dyn Component>> = self.registry.components().cloned().collect();
        for component in components {
            component
                .stop()
                .await
                .map_err(|error| ContextError::Shutdown {
                    id: component.id().to_string(),
                    error,
                })?;
        }

        self.state = LifecycleState::Stopped;
        self.logger.info("service context stopped");
        Ok(())
    }
}
