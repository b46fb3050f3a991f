//! Quorum Core - Fundamental types for consensus rounds
//!
//! This crate defines the types shared across the quorum node:
//! - Node identity (NodeId)
//! - Observed participant states (NodeState, StateCell)
//! - The index/identity resolution contract (StateMapper)
//! - Error types

pub mod error;
pub mod id;
pub mod mapper;
pub mod state;

pub use error::*;
pub use id::*;
pub use mapper::*;
pub use state::*;
