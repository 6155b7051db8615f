//! Task supervision and panic recovery.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::context::ComponentError;
use crate::observability::{LogProvider, Logger};

/// Prefix the boundary logs captured failures under.
pub const RECOVERED_PREFIX: &str = "recovered";

/// Error boundary for background tasks.
///
/// Each spawned future runs behind `catch_unwind`: a panic or an `Err`
/// return is captured, logged at error level, and never re-raised. Safe to
/// drive any number of tasks concurrently.
pub struct Supervisor {
    logger: Logger,
    shutdown_tx: broadcast::Sender<()>,
    tasks: Vec<JoinHandle<()>>,
}

impl Supervisor {
    pub fn new(provider: &LogProvider) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            logger: provider.logger(RECOVERED_PREFIX),
            shutdown_tx,
            tasks: Vec::new(),
        }
    }

    /// Spawn a supervised task.
    ///
    /// The future's failure modes stay inside the boundary: an `Err` return
    /// or a panic becomes a single error-level log entry naming the task.
    pub fn spawn<F>(&mut self, name: &str, task: F)
    where
        F: Future<Output = Result<(), ComponentError>> + Send + 'static,
    {
        let logger = self.logger.clone();
        let name = name.to_string();
        let handle = tokio::spawn(async move {
            match AssertUnwindSafe(task).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    logger.error(format!("task {name} failed: {error}"));
                }
                Err(panic) => {
                    logger.error(format!(
                        "task {name} panicked: {}",
                        panic_message(panic.as_ref())
                    ));
                }
            }
        });
        self.tasks.push(handle);
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Ask every subscribed task to wind down.
    pub fn trigger_shutdown(&self) {
        // Send fails only when no task is subscribed, which is fine.
        let _ = self.shutdown_tx.send(());
    }

    /// Number of tasks spawned so far.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for every supervised task to finish.
    pub async fn join(self) {
        for handle in self.tasks {
            // The boundary inside the task already handled failures.
            let _ = handle.await;
        }
    }
}

/// Synchronous error boundary for non-async call sites.
///
/// Runs `f`, suppressing a panic after logging it under the `recovered`
/// prefix. Returns `None` when the closure panicked.
pub fn recover_blocking<F, R>(provider: &LogProvider, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(panic) => {
            provider
                .logger(RECOVERED_PREFIX)
                .error(panic_message(panic.as_ref()));
            None
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
