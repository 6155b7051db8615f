//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Supervisor::spawn(name, future):
//!     future runs behind a panic/error boundary
//!     → panic or Err is logged under the "recovered" prefix
//!     → nothing propagates to the caller
//!
//! Shutdown:
//!     trigger_shutdown() → broadcast to every subscribed task
//!     join() → wait for all supervised tasks to finish
//! ```
//!
//! # Design Decisions
//! - Failures are captured per task and logged, not re-raised; the
//!   supervisor is the application's explicit error boundary
//! - Shutdown is cooperative: tasks subscribe and exit their loops

pub mod supervisor;

pub use supervisor::{recover_blocking, Supervisor};
