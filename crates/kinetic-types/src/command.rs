//! # Kinetic Command Model
//!
//! The decoded operation structure carried inside an envelope's
//! `command_bytes`. A `Command` is either built fresh by the request builder
//! or obtained by decoding authenticated bytes; callers treat a decoded
//! command as a read-only view.
//!
//! Enumeration fields are stored as raw `i32`. Use the accessors on
//! [`Command`] to read them through the validity predicates.

use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE ENUMERATIONS
// =============================================================================

/// Operation carried by a command. Requests are even, responses odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MessageType {
    InvalidMessageType = -1,
    GetResponse = 1,
    Get = 2,
    PutResponse = 3,
    Put = 4,
    DeleteResponse = 5,
    Delete = 6,
    GetNextResponse = 7,
    GetNext = 8,
    GetPreviousResponse = 9,
    GetPrevious = 10,
    GetKeyRangeResponse = 11,
    GetKeyRange = 12,
    GetVersionResponse = 15,
    GetVersion = 16,
    SetupResponse = 21,
    Setup = 22,
    GetLogResponse = 23,
    GetLog = 24,
    SecurityResponse = 25,
    Security = 26,
    PeerToPeerPushResponse = 27,
    PeerToPeerPush = 28,
    NoopResponse = 29,
    Noop = 30,
    FlushAllDataResponse = 31,
    FlushAllData = 32,
    PinOpResponse = 35,
    PinOp = 36,
    MediaScanResponse = 37,
    MediaScan = 38,
    MediaOptimizeResponse = 39,
    MediaOptimize = 40,
    StartBatchResponse = 41,
    StartBatch = 42,
    EndBatchResponse = 43,
    EndBatch = 44,
    AbortBatchResponse = 45,
    AbortBatch = 46,
    SetPowerLevelResponse = 47,
    SetPowerLevel = 48,
}

impl MessageType {
    /// Returns true for response message types.
    #[must_use]
    pub fn is_response(self) -> bool {
        let raw = self as i32;
        raw > 0 && raw % 2 == 1
    }
}

/// Write persistence mode for PUT / DELETE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Synchronization {
    InvalidSynchronization = -1,
    /// Persist before acknowledging.
    WriteThrough = 1,
    /// Acknowledge before persisting.
    WriteBack = 2,
    /// Persist everything written so far.
    Flush = 3,
}

/// Algorithm used to compute a value's integrity tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Algorithm {
    InvalidAlgorithm = -1,
    Sha1 = 1,
    Sha2 = 2,
    Sha3 = 3,
    Crc32c = 4,
    Crc64 = 5,
    Crc32 = 6,
}

/// Outcome reported by the device in a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StatusCode {
    InvalidStatusCode = -1,
    NotAttempted = 0,
    Success = 1,
    HmacFailure = 2,
    NotAuthorized = 3,
    VersionFailure = 4,
    InternalError = 5,
    HeaderRequired = 6,
    NotFound = 7,
    VersionMismatch = 8,
    ServiceBusy = 9,
    Expired = 10,
    DataError = 11,
    PermDataError = 12,
    RemoteConnectionError = 13,
    NoSpace = 14,
    NoSuchHmacAlgorithm = 15,
    InvalidRequest = 16,
    NestedOperationErrors = 17,
    DeviceLocked = 18,
    DeviceAlreadyUnlocked = 19,
    ConnectionTerminated = 20,
    InvalidBatch = 21,
}

// =============================================================================
// WIRE MESSAGES
// =============================================================================

/// Addressing metadata common to every command.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandHeader {
    #[prost(int64, optional, tag = "1")]
    pub cluster_version: Option<i64>,

    #[prost(int64, optional, tag = "3")]
    pub connection_id: Option<i64>,

    /// Request sequence number, echoed by responses.
    #[prost(uint64, optional, tag = "4")]
    pub sequence: Option<u64>,

    /// Sequence number being acknowledged.
    #[prost(uint64, optional, tag = "6")]
    pub ack_sequence: Option<u64>,

    #[prost(enumeration = "MessageType", optional, tag = "7")]
    pub message_type: Option<i32>,
}

/// Key/value addressing for PUT-like operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyValue {
    #[prost(bytes = "vec", optional, tag = "2")]
    pub new_version: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "3")]
    pub key: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "4")]
    pub db_version: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "5")]
    pub tag: Option<Vec<u8>>,

    #[prost(enumeration = "Algorithm", optional, tag = "6")]
    pub algorithm: Option<i32>,

    #[prost(bool, optional, tag = "7")]
    pub metadata_only: Option<bool>,

    /// Skip the version check.
    #[prost(bool, optional, tag = "8")]
    pub force: Option<bool>,

    #[prost(enumeration = "Synchronization", optional, tag = "9")]
    pub synchronization: Option<i32>,
}

/// Operation payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandBody {
    #[prost(message, optional, tag = "1")]
    pub key_value: Option<KeyValue>,
}

/// Response status.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandStatus {
    #[prost(enumeration = "StatusCode", optional, tag = "1")]
    pub code: Option<i32>,

    #[prost(string, optional, tag = "2")]
    pub status_message: Option<String>,

    #[prost(bytes = "vec", optional, tag = "3")]
    pub detailed_message: Option<Vec<u8>>,
}

/// A Kinetic command: header, optional body, optional status.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Command {
    #[prost(message, optional, tag = "1")]
    pub header: Option<CommandHeader>,

    #[prost(message, optional, tag = "2")]
    pub body: Option<CommandBody>,

    #[prost(message, optional, tag = "3")]
    pub status: Option<CommandStatus>,
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl Command {
    /// Lowest valid message type value (exclusive).
    pub const MESSAGE_TYPE_FLOOR: i32 = 1;

    /// Highest valid message type value (exclusive).
    pub const MESSAGE_TYPE_CEILING: i32 = 100;

    /// Returns `header.sequence` if nonzero, else `header.ack_sequence`.
    ///
    /// Responses carry either a sequence echo or an acknowledgement number;
    /// the echo wins when present.
    pub fn effective_sequence(&self) -> u64 {
        let Some(header) = self.header.as_ref() else {
            return 0;
        };
        match header.sequence() {
            0 => header.ack_sequence(),
            sequence => sequence,
        }
    }

    /// Returns the raw message type only if it lies strictly between 1 and
    /// 100. Anything else, including a missing header, reads as "not set".
    pub fn message_type_or_none(&self) -> Option<i32> {
        self.header
            .as_ref()
            .and_then(|header| header.message_type)
            .filter(|&raw| raw > Self::MESSAGE_TYPE_FLOOR && raw < Self::MESSAGE_TYPE_CEILING)
    }

    /// The range-valid message type mapped onto [`MessageType`].
    pub fn known_message_type(&self) -> Option<MessageType> {
        self.message_type_or_none()
            .and_then(|raw| MessageType::try_from(raw).ok())
    }

    pub fn cluster_version(&self) -> i64 {
        self.header
            .as_ref()
            .map_or(0, CommandHeader::cluster_version)
    }

    pub fn connection_id(&self) -> Option<i64> {
        self.header.as_ref().and_then(|header| header.connection_id)
    }

    /// Raw status code, if the command carries a status.
    pub fn status_code(&self) -> Option<i32> {
        self.status.as_ref().and_then(|status| status.code)
    }

    pub fn known_status_code(&self) -> Option<StatusCode> {
        self.status_code()
            .and_then(|raw| StatusCode::try_from(raw).ok())
    }

    /// Returns true if the status code is SUCCESS.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.known_status_code() == Some(StatusCode::Success)
    }

    pub fn key(&self) -> Option<&[u8]> {
        self.key_value().and_then(|kv| kv.key.as_deref())
    }

    pub fn db_version(&self) -> Option<&[u8]> {
        self.key_value().and_then(|kv| kv.db_version.as_deref())
    }

    pub fn new_version(&self) -> Option<&[u8]> {
        self.key_value().and_then(|kv| kv.new_version.as_deref())
    }

    /// Returns the force flag, false when missing.
    pub fn force(&self) -> bool {
        self.key_value().is_some_and(KeyValue::force)
    }

    /// Detailed status message, falling back to the status message string.
    pub fn error_message(&self) -> Option<&[u8]> {
        let status = self.status.as_ref()?;
        status
            .detailed_message
            .as_deref()
            .or_else(|| status.status_message.as_deref().map(str::as_bytes))
    }

    /// A serializable snapshot of the header and status, for logs and
    /// diagnostics.
    pub fn summary(&self) -> CommandSummary {
        CommandSummary {
            cluster_version: self.cluster_version(),
            connection_id: self.connection_id(),
            sequence: self.effective_sequence(),
            message_type: self.message_type_or_none(),
            status_code: self.status_code(),
        }
    }

    fn key_value(&self) -> Option<&KeyValue> {
        self.body.as_ref().and_then(|body| body.key_value.as_ref())
    }
}

/// Header and status snapshot of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSummary {
    pub cluster_version: i64,
    pub connection_id: Option<i64>,
    /// The effective sequence.
    pub sequence: u64,
    /// `None` when the raw type is out of range.
    pub message_type: Option<i32>,
    pub status_code: Option<i32>,
}
