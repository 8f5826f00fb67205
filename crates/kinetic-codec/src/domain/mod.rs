//! # Domain Layer
//!
//! Pure codec logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod builder;
pub mod codec;
