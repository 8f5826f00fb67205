//! # Task Executor Adapters
//!
//! Implementations of [`TaskExecutor`]:
//! - [`TokioTaskExecutor`]: runs work on the tokio blocking pool and the
//!   completion handler on a runtime task
//! - [`InlineExecutor`]: runs both on the caller's thread

use crate::ports::outbound::TaskExecutor;
use kinetic_types::PduError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tokio::runtime::Handle;
use tracing::error;

/// Offloads codec work onto a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTaskExecutor {
    handle: Handle,
}

impl TokioTaskExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates an executor bound to the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Creates an executor bound to the current runtime, if there is one.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl TaskExecutor for TokioTaskExecutor {
    fn submit<T, W, C>(&self, work: W, on_complete: C)
    where
        T: Send + 'static,
        W: FnOnce() -> Result<T, PduError> + Send + 'static,
        C: FnOnce(Result<T, PduError>) + Send + 'static,
    {
        let worker = self.handle.spawn_blocking(work);

        self.handle.spawn(async move {
            let outcome = match worker.await {
                Ok(result) => result,
                Err(join_error) => {
                    error!(error = %join_error, "Codec worker task aborted");
                    Err(PduError::TaskAborted(join_error.to_string()))
                }
            };
            on_complete(outcome);
        });
    }
}

/// Runs codec work synchronously on the submitting thread.
///
/// A panicking work item is reported as `PduError::TaskAborted`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn submit<T, W, C>(&self, work: W, on_complete: C)
    where
        T: Send + 'static,
        W: FnOnce() -> Result<T, PduError> + Send + 'static,
        C: FnOnce(Result<T, PduError>) + Send + 'static,
    {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                error!(reason = %reason, "Codec work panicked");
                Err(PduError::TaskAborted(reason))
            }
        };
        on_complete(outcome);
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
