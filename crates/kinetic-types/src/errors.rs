//! # Error Types
//!
//! Defines the error types returned by the codec, the request builder, and
//! the task adapter that runs them off the caller's thread.

use thiserror::Error;

/// Errors that can occur while decoding an incoming envelope.
///
/// Decoding stops at the first failing stage; no variant ever carries a
/// partially decoded command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The outer bytes do not parse as an envelope.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The envelope does not declare HMAC authentication, or the HMAC block
    /// is absent.
    #[error("Unauthenticated envelope: no HMAC authentication block")]
    Unauthenticated,

    /// The HMAC tag does not match the command bytes.
    #[error("HMAC authentication failed")]
    AuthenticationFailed,

    /// The command bytes were authenticated but do not parse as a command.
    #[error("Malformed command: {0}")]
    MalformedCommand(String),
}

impl DecodeError {
    /// Returns true if this failure is security relevant (the peer did not
    /// prove possession of the shared secret).
    #[must_use]
    pub fn is_security_failure(&self) -> bool {
        matches!(
            self,
            DecodeError::Unauthenticated | DecodeError::AuthenticationFailed
        )
    }
}

/// Errors raised while building a request command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required parameter is missing or a parameter is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Umbrella error delivered to completion handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PduError {
    /// Decoding failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Building the request failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The worker running the task aborted before producing a result.
    #[error("Task aborted: {0}")]
    TaskAborted(String),
}
