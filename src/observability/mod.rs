//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LogProvider (owned by the ServiceContext)
//!     → mints prefix-scoped Logger handles
//!     → Logger emits structured tracing events (component = prefix)
//!
//! LoggingComponent (always the first registered component)
//!     → activate() installs the tracing subscriber
//!     → JSON output in prod, human-readable elsewhere
//! ```
//!
//! # Design Decisions
//! - The provider is an explicit field on the context, not process-global
//!   state; anything holding the context can mint loggers
//! - Loggers work before activation; events are simply dropped until a
//!   subscriber is installed

pub mod logging;

pub use logging::{LogProvider, Logger, LoggingComponent};
