//! The cluster-state vector
//!
//! One vector per consensus round, sized to that round's participant
//! count. The vector stores dense positions; identities resolve through
//! the round's [`StateMapper`]. Content changes only through whole-batch
//! applies, so a rejected batch can never leave the vector half written.

use quorum_core::{NodeState, QuorumError, QuorumResult, StateCell, StateMapper};

use crate::envelope::{Header, HEADER_SIZE};
use crate::{packed, runlength};

/// Per-round vector of observed participant states
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateBitset {
    states: Vec<NodeState>,
    compressed: bool,
}

impl StateBitset {
    /// Create a vector of `len` positions, all `Legit`, serialized at
    /// fixed width
    pub fn new(len: usize) -> Self {
        StateBitset::with_mode(len, false)
    }

    /// Create a vector that serializes with the run-length codec
    pub fn compressed(len: usize) -> Self {
        StateBitset::with_mode(len, true)
    }

    fn with_mode(len: usize, compressed: bool) -> Self {
        // the header frames the count as u32; larger vectors are a
        // programmer error, not a data error
        assert!(len <= u32::MAX as usize, "vector length exceeds the wire limit");
        StateBitset {
            states: vec![NodeState::Legit; len],
            compressed,
        }
    }

    /// Number of participant positions
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether `serialize` uses the run-length codec
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Apply a batch of observations, resolving identities through
    /// `mapper`.
    ///
    /// All-or-nothing: every cell is resolved before any position is
    /// written, so a batch naming an unknown identity leaves the vector
    /// unchanged. When the same position appears more than once, the last
    /// cell in the batch wins. Positions not named keep their state.
    pub fn apply_changes<M: StateMapper>(
        &mut self,
        cells: &[StateCell],
        mapper: &M,
    ) -> QuorumResult<()> {
        let mut resolved = Vec::with_capacity(cells.len());
        for cell in cells {
            let index = mapper.node_to_index(cell.node)?;
            if index >= self.states.len() {
                return Err(QuorumError::OutOfRange {
                    index,
                    length: self.states.len(),
                });
            }
            resolved.push((index, cell.state));
        }

        for (index, state) in resolved {
            self.states[index] = state;
        }
        Ok(())
    }

    /// Read back one cell per position, in index order.
    ///
    /// Fails with `OutOfRange` at the first position the mapper cannot
    /// resolve (a mapper shorter than the vector).
    pub fn cells<M: StateMapper>(&self, mapper: &M) -> QuorumResult<Vec<StateCell>> {
        let mut cells = Vec::with_capacity(self.states.len());
        for (i, &state) in self.states.iter().enumerate() {
            let node = mapper.index_to_node(i)?;
            cells.push(StateCell::new(node, state));
        }
        Ok(cells)
    }

    /// Serialize to wire bytes: 5-byte envelope header, then the payload
    /// of whichever codec the compressed flag selects
    pub fn serialize(&self) -> Vec<u8> {
        let header = Header::new(self.states.len() as u32, self.compressed);
        let mut buf = header.to_bytes();
        if self.compressed {
            runlength::encode(&mut buf, &self.states);
        } else {
            packed::encode(&mut buf, &self.states);
        }
        buf
    }

    /// Reconstruct a vector from wire bytes.
    ///
    /// The declared count is bounded against the actual buffer before any
    /// state is decoded; trailing bytes beyond the payload are ignored.
    pub fn deserialize(buf: &[u8]) -> QuorumResult<Self> {
        let header = Header::parse(buf)?;
        let count = header.count as usize;
        let compressed = header.flags.is_compressed();
        let payload = &buf[HEADER_SIZE..];

        let states = if compressed {
            let mut payload = payload;
            runlength::decode(&mut payload, count)?
        } else {
            packed::decode(payload, count)?
        };

        Ok(StateBitset { states, compressed })
    }
}
