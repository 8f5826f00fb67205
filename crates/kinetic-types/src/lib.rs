//! # Kinetic Types Crate
//!
//! This crate contains the protobuf wire model for Kinetic protocol data
//! units and the HMAC primitives that authenticate them.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Field numbers and enum values are defined
//!   here once; the codec crate never hand-writes wire bytes.
//! - **Two Independent Layers**: The outer [`Envelope`] carries the command as
//!   opaque bytes plus an authentication block. The inner [`Command`] is only
//!   ever obtained by decoding those bytes after the tag has been verified.
//! - **Raw Enumerations**: Enum-typed fields are kept as raw `i32` so an
//!   out-of-range value is observable and filtered, never silently coerced.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod command;
pub mod envelope;
pub mod errors;
pub mod security;

pub use command::{
    Algorithm, Command, CommandBody, CommandHeader, CommandStatus, CommandSummary, KeyValue,
    MessageType, StatusCode, Synchronization,
};
pub use envelope::{AuthType, Envelope, HmacAuth};
pub use errors::*;
pub use security::{compute_tag, constant_time_eq, verify_tag, HmacKey, HmacTag, HMAC_TAG_LEN};
