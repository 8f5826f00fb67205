//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//! - **Outbound (Driven)**: The executor this subsystem offloads work to

pub mod inbound;
pub mod outbound;
