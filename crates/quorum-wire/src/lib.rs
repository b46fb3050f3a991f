//! Quorum Wire - Binary format for the cluster-state vector
//!
//! This crate implements the wire format carrying per-round cluster state:
//! - Envelope header (5 bytes: flags + participant count)
//! - Fixed-width packed payload (2 bits per state)
//! - Run-length payload for mostly uniform vectors

pub mod bitset;
pub mod envelope;
pub mod flags;
pub mod packed;
pub mod runlength;
pub mod varint;

pub use bitset::*;
pub use envelope::*;
pub use flags::*;
