//! Service context subsystem.
//!
//! # Data Flow
//! ```text
//! ContextBuilder (builder.rs):
//!     options applied → flags initialized → env file loaded → flags parsed
//!     → ServiceContext (constructed, nothing activated)
//!
//! ServiceContext (service.rs):
//!     load()  → activate components in registration order
//!     stop()  → stop components in registration order
//!     get()   → O(1) lookup through the registry index
//!
//! ComponentRegistry (registry.rs):
//!     one owned container: insertion-ordered entries + id → position index
//! ```
//!
//! # Design Decisions
//! - Registration order is activation order is shutdown order; there is no
//!   dependency graph
//! - A duplicate component id is ignored, not an error; the first wins
//! - First activation/stop failure aborts the pass; no rollback

pub mod builder;
pub mod component;
pub mod registry;
pub mod service;

pub use builder::ContextBuilder;
pub use component::{Component, ComponentError};
pub use registry::ComponentRegistry;
pub use service::{ContextError, LifecycleState, ServiceContext};
