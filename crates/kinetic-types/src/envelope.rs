//! # Kinetic Envelope
//!
//! The outer wire structure of every Kinetic PDU (wire name `Message`).
//!
//! ## Security Properties
//!
//! - **Opaque Payload**: The command travels as raw `command_bytes`. The
//!   envelope never interprets them; they are parsed only after the tag over
//!   those exact bytes has been verified.
//! - **Single Auth Scheme**: Only [`AuthType::HmacAuth`] envelopes can be
//!   verified. Every other declared type is treated as unauthenticated.
//! - **Explicit Presence**: All fields are optional on the wire, so a missing
//!   authentication block is distinguishable from an empty one.

use crate::security::{verify_tag, HmacKey, HmacTag};

/// How the sender authenticated the envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AuthType {
    InvalidAuthType = -1,
    /// HMAC-SHA1 over the length-prefixed command bytes.
    HmacAuth = 1,
    /// PIN based (device erase / lock). Not verifiable by the codec.
    PinAuth = 2,
    /// Unsolicited status sent by the device on connect. Carries no tag.
    UnsolicitedStatus = 3,
}

/// The HMAC authentication block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HmacAuth {
    /// Identifier of the key the tag was computed with.
    #[prost(int64, optional, tag = "1")]
    pub identity: Option<i64>,

    /// The 20-byte HMAC-SHA1 tag.
    #[prost(bytes = "vec", optional, tag = "2")]
    pub hmac: Option<Vec<u8>>,
}

/// The outer envelope carried on the wire.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Envelope {
    // =========================================================================
    // AUTHENTICATION SECTION
    // =========================================================================
    /// Declared authentication scheme. Kept raw so unknown values are
    /// observable.
    #[prost(enumeration = "AuthType", optional, tag = "4")]
    pub auth_type: Option<i32>,

    /// Present iff `auth_type` is HMAC.
    #[prost(message, optional, tag = "5")]
    pub hmac_auth: Option<HmacAuth>,

    // =========================================================================
    // PAYLOAD SECTION
    // =========================================================================
    /// The serialized [`crate::Command`], exactly as tagged.
    #[prost(bytes = "vec", optional, tag = "7")]
    pub command_bytes: Option<Vec<u8>>,
}

impl Envelope {
    /// Assembles an HMAC-authenticated envelope from an already computed tag.
    ///
    /// The tag MUST have been computed over `command_bytes` as given here.
    pub fn hmac_authenticated(identity: i64, tag: HmacTag, command_bytes: Vec<u8>) -> Self {
        Self {
            auth_type: Some(AuthType::HmacAuth as i32),
            hmac_auth: Some(HmacAuth {
                identity: Some(identity),
                hmac: Some(tag.to_vec()),
            }),
            command_bytes: Some(command_bytes),
        }
    }

    /// Returns true if the envelope declares HMAC auth and carries the block.
    #[must_use]
    pub fn is_hmac_authenticated(&self) -> bool {
        self.auth_type == Some(AuthType::HmacAuth as i32) && self.hmac_auth.is_some()
    }

    /// The key identity from the HMAC block, if any.
    pub fn key_identity(&self) -> Option<i64> {
        self.hmac_auth.as_ref().and_then(|auth| auth.identity)
    }

    /// The provided tag, if any. Not checked for length.
    pub fn hmac_tag(&self) -> Option<&[u8]> {
        self.hmac_auth.as_ref().and_then(|auth| auth.hmac.as_deref())
    }

    /// Verifies the provided tag against the command bytes.
    ///
    /// Returns false if the envelope is not HMAC authenticated, the tag is
    /// missing or has the wrong length, or the tag does not match.
    pub fn verify(&self, key: &HmacKey) -> bool {
        if !self.is_hmac_authenticated() {
            return false;
        }
        verify_tag(self.hmac_tag(), self.command_bytes(), key)
    }
}
