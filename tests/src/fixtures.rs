//! # Shared Fixtures
//!
//! Known-answer vectors and helpers used across the suite.

use kinetic_codec::{CodecConfig, InlineExecutor, PduCodecService};
use kinetic_types::{Envelope, HmacKey};
use prost::Message;

/// Shared secret used by the published Kinetic examples.
pub const DEMO_SECRET: &str = "asdfasdf";

/// Identity paired with [`DEMO_SECRET`].
pub const DEMO_IDENTITY: i64 = 1;

/// NOOP, connection 1234, sequence 1, cluster version 0.
pub const NOOP_COMMAND_HEX: &str = "0a09080018d2092001381e";

/// [`NOOP_COMMAND_HEX`] wrapped and tagged under [`DEMO_SECRET`].
pub const NOOP_PDU_HEX: &str =
    "20012a18080112145878fdfd127d22ddec7edb96ace96827fc5040d03a0b0a09080018d2092001381e";

/// HMAC-SHA1 of [`NOOP_COMMAND_HEX`] without the length prefix.
pub const NOOP_UNPREFIXED_TAG_HEX: &str = "bf853d3133fb40b4b2e11f47ee877994f82d87a1";

pub fn demo_key() -> HmacKey {
    HmacKey::from(DEMO_SECRET)
}

pub fn demo_config() -> CodecConfig {
    CodecConfig::new(DEMO_IDENTITY, demo_key())
}

pub fn inline_service() -> PduCodecService<InlineExecutor> {
    PduCodecService::new(&demo_config(), InlineExecutor)
}

/// Decodes the envelope of `pdu`, applies `mutate`, and re-encodes it.
///
/// # Panics
///
/// Panics if `pdu` is not a valid envelope.
pub fn rewrite_envelope(pdu: &[u8], mutate: impl FnOnce(&mut Envelope)) -> Vec<u8> {
    let mut envelope = Envelope::decode(pdu).expect("fixture PDU must be a valid envelope");
    mutate(&mut envelope);
    envelope.encode_to_vec()
}
