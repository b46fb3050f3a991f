//! Inbound membership claims
//!
//! Claims arrive from the network ahead of the round that consumes them
//! and are buffered in arrival order. The queue is shared between the
//! network receive path and the consensus phase logic, hence the lock.

use std::collections::VecDeque;

use parking_lot::RwLock;
use quorum_core::NodeId;
use tracing::trace;

/// A membership change announced to the cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipClaim {
    /// Node requests to join the cluster
    Join { node: NodeId },
    /// Node announces a graceful leave
    Leave { node: NodeId },
}

impl MembershipClaim {
    /// The node this claim is about
    #[inline]
    pub fn node(&self) -> NodeId {
        match self {
            MembershipClaim::Join { node } | MembershipClaim::Leave { node } => *node,
        }
    }
}

/// Thread-safe FIFO of claims awaiting the next round
#[derive(Debug, Default)]
pub struct ClaimQueue {
    data: RwLock<VecDeque<MembershipClaim>>,
}

impl ClaimQueue {
    pub fn new() -> Self {
        ClaimQueue::default()
    }

    /// Append a claim to the back of the queue
    pub fn push(&self, claim: MembershipClaim) {
        trace!("claim queued: {:?}", claim);
        self.data.write().push_back(claim);
    }

    /// Remove and return the front claim
    pub fn pop(&self) -> Option<MembershipClaim> {
        let claim = self.data.write().pop_front();
        if let Some(claim) = claim {
            trace!("claim dequeued: {:?}", claim);
        }
        claim
    }

    /// Return the front claim without removing it
    pub fn front(&self) -> Option<MembershipClaim> {
        self.data.read().front().copied()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
