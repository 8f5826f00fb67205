//! # Inbound Ports (Driving Ports / API)
//!
//! The synchronous, caller-facing surface of the codec.

use crate::domain::builder::OperationKind;
use kinetic_types::{BuildError, Command, DecodeError};

/// Primary PDU Codec API.
///
/// Every operation is pure and CPU bound. Implementations hold the shared
/// secret and identity and must be thread-safe (`Send + Sync`).
pub trait PduCodecApi: Send + Sync {
    /// Build a request command for `kind`.
    ///
    /// # Errors
    /// * `BuildError::InvalidArgument` - PUT without a key
    fn build_request(
        &self,
        kind: OperationKind,
        connection_id: i64,
        sequence: u64,
        key: Option<&[u8]>,
    ) -> Result<Command, BuildError>;

    /// Encode `command` into an authenticated PDU.
    fn encode(&self, command: &Command) -> Vec<u8>;

    /// Decode and authenticate an incoming PDU.
    ///
    /// # Errors
    /// See [`crate::domain::codec::decode`].
    fn decode(&self, bytes: &[u8]) -> Result<Command, DecodeError>;
}
