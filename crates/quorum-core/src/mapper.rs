//! Index/identity resolution contract
//!
//! The state vector stores dense positions only; translating a position to
//! a node identity (and back) goes through a mapper supplied per round.
//! Production wires in the membership list's active ordering, tests
//! substitute a fixed list.

use std::collections::HashMap;

use crate::{NodeId, QuorumError, QuorumResult};

/// Bidirectional mapping between dense vector positions and node
/// identities.
///
/// Mappers are read-only from the codec's perspective and may be shared by
/// many vectors in flight; implementations must tolerate concurrent reads.
pub trait StateMapper {
    /// Resolve a vector position to a node identity
    fn index_to_node(&self, index: usize) -> QuorumResult<NodeId>;

    /// Resolve a node identity to its vector position
    fn node_to_index(&self, node: NodeId) -> QuorumResult<usize>;

    /// Number of participants in this round's ordering
    fn length(&self) -> usize;
}

/// Mapper backed by an ordered participant list
#[derive(Clone, Debug, Default)]
pub struct IndexedMapper {
    nodes: Vec<NodeId>,
    indices: HashMap<NodeId, usize>,
}

impl IndexedMapper {
    /// Build a mapper from the round's participant ordering.
    ///
    /// A duplicated identity keeps its first position.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        let mut indices = HashMap::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            indices.entry(node).or_insert(i);
        }
        IndexedMapper { nodes, indices }
    }
}

impl StateMapper for IndexedMapper {
    fn index_to_node(&self, index: usize) -> QuorumResult<NodeId> {
        self.nodes
            .get(index)
            .copied()
            .ok_or(QuorumError::OutOfRange {
                index,
                length: self.nodes.len(),
            })
    }

    fn node_to_index(&self, node: NodeId) -> QuorumResult<usize> {
        self.indices
            .get(&node)
            .copied()
            .ok_or(QuorumError::NodeMissing(node))
    }

    fn length(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_of(ids: &[u64]) -> IndexedMapper {
        IndexedMapper::new(ids.iter().map(|&id| NodeId::new(id)).collect())
    }

    #[test]
    fn test_resolves_both_directions() {
        let mapper = mapper_of(&[10, 20, 30]);

        assert_eq!(mapper.length(), 3);
        assert_eq!(mapper.index_to_node(1).unwrap(), NodeId::new(20));
        assert_eq!(mapper.node_to_index(NodeId::new(30)).unwrap(), 2);
    }

    #[test]
    fn test_unknown_node_is_missing() {
        let mapper = mapper_of(&[10, 20]);

        let err = mapper.node_to_index(NodeId::new(99)).unwrap_err();
        assert!(matches!(err, QuorumError::NodeMissing(n) if n == NodeId::new(99)));
    }

    #[test]
    fn test_index_past_length_is_out_of_range() {
        let mapper = mapper_of(&[10, 20]);

        let err = mapper.index_to_node(2).unwrap_err();
        assert!(matches!(
            err,
            QuorumError::OutOfRange {
                index: 2,
                length: 2
            }
        ));
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let mapper = mapper_of(&[7, 7, 8]);

        assert_eq!(mapper.node_to_index(NodeId::new(7)).unwrap(), 0);
    }
}
