//! Application bootstrap toolkit.
//!
//! Wires together the pieces a service needs before it can do real work:
//! an ordered component registry, flag and environment-file configuration,
//! prefix-scoped structured logging, and a supervisor for background tasks.
//!
//! # Architecture Overview
//!
//! ```text
//! ServiceContext::builder()
//!     → register components (logging component is always first)
//!     → components contribute flags (config/flags)
//!     → environment file loaded (config/env_file)
//!     → flags parsed: CLI > env var > default
//!     → build() returns a constructed, not-yet-activated context
//!
//! context.load()
//!     → activates every component in registration order
//!     → first failure aborts, later components untouched
//!
//! context.stop()
//!     → stops every component in registration order
//!
//! Supervisor
//!     → spawns background tasks behind a panic/error boundary
//!     → failures are logged under the "recovered" prefix, never re-raised
//! ```

// Core subsystems
pub mod config;
pub mod context;

// Cross-cutting concerns
pub mod lifecycle;
pub mod model;
pub mod observability;

pub use config::{ConfigError, Environment, FlagSet};
pub use context::{
    Component, ComponentError, ContextBuilder, ContextError, LifecycleState, ServiceContext,
};
pub use lifecycle::{recover_blocking, Supervisor};
pub use model::Record;
pub use observability::{LogProvider, Logger, LoggingComponent};
