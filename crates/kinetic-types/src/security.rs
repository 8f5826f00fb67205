//! # HMAC Authenticator
//!
//! This module provides the **single, authoritative implementation** of the
//! keyed integrity tag carried by every Kinetic envelope.
//!
//! ## Tag Construction
//!
//! ```text
//! tag = HMAC-SHA1(key, be_u32(len(command_bytes)) || command_bytes)
//! ```
//!
//! The length prefix is the length of the serialized command bytes exactly as
//! they are stored in the envelope. It is part of the tag input and MUST NOT
//! be omitted: peers that hash the bare command bytes produce a different tag
//! and are rejected.
//!
//! ## Security Properties
//!
//! - **Constant-Time Comparison**: every byte of the expected tag is compared,
//!   differences are accumulated, and the result is inspected once at the end.
//! - **No Ambient Keys**: the shared secret is always passed explicitly.
//! - **Key Hygiene**: [`HmacKey`] zeroizes its bytes on drop and never prints
//!   key material.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha1 = Hmac<Sha1>;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Output length of the HMAC-SHA1 tag in bytes.
pub const HMAC_TAG_LEN: usize = 20;

/// A computed HMAC-SHA1 tag.
pub type HmacTag = [u8; HMAC_TAG_LEN];

// =============================================================================
// SHARED SECRET
// =============================================================================

/// The shared secret used to key the HMAC.
///
/// Supplied by the embedding application (usually from connection setup);
/// this crate never generates or persists it.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey {
    bytes: Vec<u8>,
}

impl HmacKey {
    /// Creates a key from raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Returns the raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the secret length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for HmacKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes())
    }
}

impl From<String> for HmacKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl PartialEq for HmacKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for HmacKey {}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose key material
        write!(f, "HmacKey(<redacted>, len={})", self.bytes.len())
    }
}

// =============================================================================
// TAG COMPUTATION
// =============================================================================

/// Computes the HMAC-SHA1 tag over the length-prefixed command bytes.
///
/// # Arguments
///
/// - `command_bytes`: The serialized command, exactly as stored in the envelope
/// - `key`: The shared secret
///
/// # Returns
///
/// The 20-byte tag. Same inputs always produce the same tag.
pub fn compute_tag(command_bytes: &[u8], key: &HmacKey) -> HmacTag {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");

    // Kinetic length prefix: network byte order, pre-envelope length
    let declared_len = command_bytes.len() as u32;
    mac.update(&declared_len.to_be_bytes());
    mac.update(command_bytes);

    let digest = mac.finalize().into_bytes();
    let mut tag = [0u8; HMAC_TAG_LEN];
    tag.copy_from_slice(&digest);
    tag
}

/// Verifies a provided tag against the command bytes.
///
/// # Returns
///
/// - `true` if the tag matches
/// - `false` if the tag is missing, has the wrong length, or differs
///
/// # Security
///
/// Uses [`constant_time_eq`]; never short-circuits on the first differing
/// byte.
pub fn verify_tag(provided: Option<&[u8]>, command_bytes: &[u8], key: &HmacKey) -> bool {
    let expected = compute_tag(command_bytes, key);

    match provided {
        Some(provided) => constant_time_eq(&expected, provided),
        None => false,
    }
}

/// Compares `provided` against `expected` without early exit.
///
/// Walks every byte of `expected`, OR-accumulating XOR differences; a short
/// `provided` is padded with zeros for the walk. Returns true only if the
/// accumulator is zero and the lengths match.
pub fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let mut diff = 0u8;
    for (i, &byte) in expected.iter().enumerate() {
        let other = provided.get(i).copied().unwrap_or(0);
        diff |= byte ^ other;
    }

    diff == 0 && expected.len() == provided.len()
}
