//! # Envelope Codec
//!
//! Serializes a [`Command`] into an HMAC-authenticated envelope, and parses an
//! incoming envelope back into a `Command` only after its tag verifies.
//!
//! ## Decode Ordering
//!
//! ```text
//! parse envelope -> check auth type -> verify tag -> parse command
//! ```
//!
//! Each stage stops on failure. The inner command bytes are never parsed
//! before the tag over them has been verified.

use kinetic_types::{compute_tag, verify_tag, Command, DecodeError, Envelope, HmacKey};
use prost::Message;
use tracing::{debug, warn};

/// Encodes `command` into a complete, authenticated PDU.
///
/// # Arguments
///
/// - `command`: The command to send
/// - `identity`: Identifier of the key `key` belongs to
/// - `key`: The shared secret
///
/// # Returns
///
/// A freshly allocated buffer that [`decode`] accepts under the same key.
pub fn encode(command: &Command, identity: i64, key: &HmacKey) -> Vec<u8> {
    // 1. The tag covers exactly these bytes, so they must be final first
    let command_bytes = command.encode_to_vec();
    let command_len = command_bytes.len();

    // 2. Tag the serialized command
    let tag = compute_tag(&command_bytes, key);

    // 3. Wrap and serialize the outer envelope
    let pdu = Envelope::hmac_authenticated(identity, tag, command_bytes).encode_to_vec();

    debug!(
        identity,
        sequence = command.effective_sequence(),
        message_type = ?command.message_type_or_none(),
        command_len,
        pdu_len = pdu.len(),
        "Encoded Kinetic PDU"
    );

    pdu
}

/// Decodes and authenticates an incoming PDU.
///
/// # Errors
///
/// - [`DecodeError::MalformedEnvelope`]: outer bytes do not parse
/// - [`DecodeError::Unauthenticated`]: auth type is not HMAC or the HMAC block
///   is absent
/// - [`DecodeError::AuthenticationFailed`]: the tag is missing, has the wrong
///   length, or does not match
/// - [`DecodeError::MalformedCommand`]: the authenticated command bytes do not
///   parse
pub fn decode(bytes: &[u8], key: &HmacKey) -> Result<Command, DecodeError> {
    // 1. Outer envelope
    let envelope = Envelope::decode(bytes).map_err(|e| {
        warn!(pdu_len = bytes.len(), error = %e, "Rejected malformed envelope");
        DecodeError::MalformedEnvelope(e.to_string())
    })?;

    // 2. Only HMAC envelopes are trusted
    if !envelope.is_hmac_authenticated() {
        warn!(
            auth_type = ?envelope.auth_type,
            has_hmac_block = envelope.hmac_auth.is_some(),
            "Rejected unauthenticated envelope"
        );
        return Err(DecodeError::Unauthenticated);
    }

    let identity = envelope.key_identity();
    let command_bytes = envelope.command_bytes();

    // 3. Verify before the command bytes are interpreted
    if !verify_tag(envelope.hmac_tag(), command_bytes, key) {
        warn!(
            identity = ?identity,
            command_len = command_bytes.len(),
            tag_len = envelope.hmac_tag().map_or(0, <[u8]>::len),
            "HMAC authentication failed"
        );
        return Err(DecodeError::AuthenticationFailed);
    }

    // 4. Inner command
    let command = Command::decode(command_bytes).map_err(|e| {
        warn!(
            identity = ?identity,
            command_len = command_bytes.len(),
            error = %e,
            "Rejected malformed command"
        );
        DecodeError::MalformedCommand(e.to_string())
    })?;

    debug!(
        identity = ?identity,
        sequence = command.effective_sequence(),
        message_type = ?command.message_type_or_none(),
        command_len = command_bytes.len(),
        "Decoded Kinetic PDU"
    );

    Ok(command)
}
