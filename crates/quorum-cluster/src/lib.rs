//! Quorum Cluster - membership plumbing around consensus rounds
//!
//! Components here sit next to the per-round state vector: inbound
//! membership claims buffered between rounds.

pub mod claims;

pub use claims::*;
