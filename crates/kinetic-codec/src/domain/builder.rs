//! # Request Builder
//!
//! Maps the closed set of supported operations onto populated commands.
//! Adding an operation means adding an [`OperationKind`] variant and its
//! population rule in [`RequestBuilder::build`] and [`build_response`].

use kinetic_types::{
    BuildError, Command, CommandBody, CommandHeader, CommandStatus, KeyValue, MessageType,
    StatusCode, Synchronization,
};
use std::fmt;

/// The operations this codec can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// No-op round trip, used as a liveness check.
    Noop,
    /// Store a value under a key.
    Put,
}

impl OperationKind {
    /// Wire message type of the request.
    pub fn request_type(self) -> MessageType {
        match self {
            OperationKind::Noop => MessageType::Noop,
            OperationKind::Put => MessageType::Put,
        }
    }

    /// Wire message type of the matching response.
    pub fn response_type(self) -> MessageType {
        match self {
            OperationKind::Noop => MessageType::NoopResponse,
            OperationKind::Put => MessageType::PutResponse,
        }
    }
}

impl TryFrom<i32> for OperationKind {
    type Error = BuildError;

    /// Accepts either the request or the response message type code.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match MessageType::try_from(code) {
            Ok(MessageType::Noop | MessageType::NoopResponse) => Ok(OperationKind::Noop),
            Ok(MessageType::Put | MessageType::PutResponse) => Ok(OperationKind::Put),
            _ => Err(BuildError::InvalidArgument(format!(
                "unsupported operation code {code}"
            ))),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Noop => write!(f, "NOOP"),
            OperationKind::Put => write!(f, "PUT"),
        }
    }
}

/// Builds request commands for a given cluster version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestBuilder {
    cluster_version: i64,
}

impl RequestBuilder {
    /// Creates a builder for cluster version 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster_version(mut self, cluster_version: i64) -> Self {
        self.cluster_version = cluster_version;
        self
    }

    pub fn cluster_version(&self) -> i64 {
        self.cluster_version
    }

    /// Builds a request command.
    ///
    /// `key` is required for PUT and ignored for NOOP.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidArgument`] if a PUT is requested without a key.
    pub fn build(
        &self,
        kind: OperationKind,
        connection_id: i64,
        sequence: u64,
        key: Option<&[u8]>,
    ) -> Result<Command, BuildError> {
        let header = CommandHeader {
            cluster_version: Some(self.cluster_version),
            connection_id: Some(connection_id),
            sequence: Some(sequence),
            ack_sequence: None,
            message_type: Some(kind.request_type() as i32),
        };

        let body = match kind {
            OperationKind::Noop => None,
            OperationKind::Put => {
                let key = key.ok_or_else(|| {
                    BuildError::InvalidArgument(format!("{kind} requires a key"))
                })?;
                Some(CommandBody {
                    key_value: Some(KeyValue {
                        key: Some(key.to_vec()),
                        synchronization: Some(Synchronization::WriteThrough as i32),
                        ..Default::default()
                    }),
                })
            }
        };

        Ok(Command {
            header: Some(header),
            body,
            status: None,
        })
    }
}

/// Builds a request command with cluster version 0.
///
/// # Errors
///
/// [`BuildError::InvalidArgument`] if a PUT is requested without a key.
pub fn build_request(
    kind: OperationKind,
    connection_id: i64,
    sequence: u64,
    key: Option<&[u8]>,
) -> Result<Command, BuildError> {
    RequestBuilder::new().build(kind, connection_id, sequence, key)
}

/// Builds the response acknowledging request `ack_sequence`.
///
/// PUT responses carry an empty key/value body; NOOP responses carry none.
pub fn build_response(
    kind: OperationKind,
    ack_sequence: u64,
    code: StatusCode,
    detailed_message: Option<&[u8]>,
) -> Command {
    let body = match kind {
        OperationKind::Noop => None,
        OperationKind::Put => Some(CommandBody {
            key_value: Some(KeyValue::default()),
        }),
    };

    Command {
        header: Some(CommandHeader {
            ack_sequence: Some(ack_sequence),
            message_type: Some(kind.response_type() as i32),
            ..Default::default()
        }),
        body,
        status: Some(CommandStatus {
            code: Some(code as i32),
            status_message: None,
            detailed_message: detailed_message.map(<[u8]>::to_vec),
        }),
    }
}
