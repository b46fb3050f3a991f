//! Observed participant states
//!
//! Every participant of a consensus round is observed in exactly one of
//! four states. The discriminants are shared network-wide and form the
//! 2-bit wire codes; changing them is a protocol version change.

use crate::NodeId;

/// Bits one state occupies on the wire
pub const STATE_BITS: usize = 2;

/// States packed into a single byte by the fixed-width codec
pub const STATES_PER_BYTE: usize = 8 / STATE_BITS;

/// Observed state of one consensus participant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeState {
    /// Answered correctly and on time
    Legit = 0,
    /// Missed the phase deadline
    TimedOut = 1,
    /// Gave provably contradictory answers
    Fraud = 2,
    /// Answers disagree with the majority view
    Inconsistent = 3,
}

impl NodeState {
    /// Wire code in the low 2 bits
    #[inline]
    pub fn to_bits(self) -> u8 {
        self as u8
    }

    /// Decode a wire code; codes above 3 are not states
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(NodeState::Legit),
            1 => Some(NodeState::TimedOut),
            2 => Some(NodeState::Fraud),
            3 => Some(NodeState::Inconsistent),
            _ => None,
        }
    }
}

impl Default for NodeState {
    fn default() -> Self {
        NodeState::Legit
    }
}

/// One observation: a participant identity and its observed state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateCell {
    pub node: NodeId,
    pub state: NodeState,
}

impl StateCell {
    #[inline]
    pub fn new(node: NodeId, state: NodeState) -> Self {
        StateCell { node, state }
    }
}
