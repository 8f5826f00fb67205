//! # Kinetic PDU Codec
//!
//! Builds, encodes and authenticates Kinetic protocol data units, and parses
//! incoming ones into a trustworthy [`Command`](kinetic_types::Command).
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure codec and builder logic, no I/O
//! - **Ports Layer** (`ports/`): The caller-facing API and the task executor
//!   contract
//! - **Adapters Layer** (`adapters/`): Executors that run codec work off the
//!   caller's thread
//! - **Service Layer** (`service.rs`): Wires configuration, domain and
//!   executor together
//!
//! ## Security Notes
//!
//! - **Verify Before Parse**: Command bytes are never parsed before their tag
//!   has been verified.
//! - **No Ambient Secret**: The shared secret is passed explicitly to every
//!   encode / decode call, or held by a service built from [`CodecConfig`].
//! - **Quiet Failures**: Authentication failures are logged with identity and
//!   lengths only. Secrets and tags never reach the log.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::executor::{InlineExecutor, TokioTaskExecutor};
pub use config::{CodecConfig, ConfigError};
pub use domain::builder::{build_request, build_response, OperationKind, RequestBuilder};
pub use domain::codec::{decode, encode};
pub use ports::inbound::PduCodecApi;
pub use ports::outbound::TaskExecutor;
pub use service::PduCodecService;
