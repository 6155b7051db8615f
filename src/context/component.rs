//! Component contract.

use std::any::Any;

use async_trait::async_trait;

use crate::config::FlagSet;
use crate::context::service::ServiceContext;

/// Error surfaced by a component's lifecycle hooks.
///
/// Components wrap whatever their collaborators produce; the context reports
/// the first failure verbatim and does not aggregate.
pub type ComponentError = Box<dyn std::error::Error + Send + Sync>;

/// A named unit participating in application startup and shutdown.
///
/// Components register flags before parsing, activate in registration order
/// with the context as their dependency-lookup surface, and stop in the same
/// order. The `id` must be unique and stable for the process lifetime.
#[async_trait]
pub trait Component: Send + Sync {
    /// Unique identity used for registry lookups.
    fn id(&self) -> &str;

    /// Contribute process flags. Runs once, before flag parsing.
    fn init_flags(&self, _flags: &mut FlagSet) {}

    /// Begin doing useful work. Runs after configuration is parsed.
    async fn activate(&self, ctx: &ServiceContext) -> Result<(), ComponentError>;

    /// Release resources. Runs in registration order during shutdown.
    async fn stop(&self) -> Result<(), ComponentError>;

    /// Downcasting hook so `ServiceContext::get` callers can reach the
    /// concrete type.
    fn as_any(&self) -> &dyn Any;
}
