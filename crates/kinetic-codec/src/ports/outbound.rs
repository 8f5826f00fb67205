//! # Outbound Ports (Driven Ports / SPI)
//!
//! The executor that moves codec work off the caller's thread.

use kinetic_types::PduError;

/// Runs a unit of work and delivers its outcome to a completion handler.
///
/// Implementations must:
/// - invoke `work` exactly once
/// - invoke `on_complete` exactly once, with the work's result or with
///   `PduError::TaskAborted` if the work could not finish
/// - never retry
pub trait TaskExecutor: Send + Sync {
    /// Submit `work`; `on_complete` receives its outcome.
    fn submit<T, W, C>(&self, work: W, on_complete: C)
    where
        T: Send + 'static,
        W: FnOnce() -> Result<T, PduError> + Send + 'static,
        C: FnOnce(Result<T, PduError>) + Send + 'static;
}
