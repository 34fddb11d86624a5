//! Position rings - circular doubly linked dial positions
//!
//! Nodes live in a fixed arena and link to each other by slot index, so a
//! ring can be shared between hands without any aliasing of mutable state.
//! Topology is fixed at `build`; only the hands' cursors move.
//!
//! INVARIANT: following `next` `size` times from any node returns to it.

use std::fmt;

use reloj_core::{ClockError, ClockResult};

/// Handle to a node inside a `PositionRing`
/// Only meaningful for the ring that produced it
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node#{}", self.0)
    }
}

/// One labeled position on a dial
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionNode {
    ordinal: usize,
    next: NodeIndex,
    prev: NodeIndex,
}

impl PositionNode {
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[inline]
    pub fn next(&self) -> NodeIndex {
        self.next
    }

    #[inline]
    pub fn prev(&self) -> NodeIndex {
        self.prev
    }
}

/// Fixed-size closed ring of positions labeled 0..size
pub struct PositionRing {
    nodes: Box<[PositionNode]>,
    head: NodeIndex,
}

impl PositionRing {
    /// Build a closed ring of `size` nodes labeled in ascending order
    pub fn build(size: usize) -> ClockResult<Self> {
        if size == 0 {
            return Err(ClockError::InvalidSize { size });
        }

        let nodes = (0..size)
            .map(|slot| PositionNode {
                ordinal: slot,
                next: NodeIndex((slot + 1) % size),
                prev: NodeIndex((slot + size - 1) % size),
            })
            .collect();

        Ok(PositionRing {
            nodes,
            head: NodeIndex(0),
        })
    }

    /// Number of positions on the ring
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The node labeled 0
    #[inline]
    pub fn head(&self) -> NodeIndex {
        self.head
    }

    /// Dereference a handle.
    ///
    /// Panics if `index` came from a larger ring.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &PositionNode {
        &self.nodes[index.0]
    }

    #[inline]
    pub fn next(&self, index: NodeIndex) -> NodeIndex {
        self.node(index).next
    }

    #[inline]
    pub fn prev(&self, index: NodeIndex) -> NodeIndex {
        self.node(index).prev
    }

    /// Find the node labeled `ordinal` by walking from the head.
    ///
    /// Walks over `next` or `prev` links, whichever reaches the target in
    /// fewer steps. O(size); meant for seeding, not for the tick path.
    pub fn node_at(&self, ordinal: usize) -> ClockResult<NodeIndex> {
        let size = self.size();
        if ordinal >= size {
            return Err(ClockError::OrdinalOutOfRange { ordinal, size });
        }

        let forward = ordinal <= size - ordinal;
        let mut cursor = self.head;
        for _ in 0..size {
            let node = self.node(cursor);
            if node.ordinal == ordinal {
                return Ok(cursor);
            }
            cursor = if forward { node.next } else { node.prev };
        }

        Err(ClockError::OrdinalOutOfRange { ordinal, size })
    }

    /// Ordinals visited over one full lap starting at `start`
    pub fn ordinals_from(&self, start: NodeIndex) -> Ordinals<'_> {
        Ordinals {
            ring: self,
            cursor: start,
            remaining: self.size(),
        }
    }
}

impl fmt::Debug for PositionRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionRing")
            .field("size", &self.size())
            .finish()
    }
}

/// Forward iterator over one lap of a ring
pub struct Ordinals<'a> {
    ring: &'a PositionRing,
    cursor: NodeIndex,
    remaining: usize,
}

impl Iterator for Ordinals<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.ring.node(self.cursor);
        self.cursor = node.next;
        Some(node.ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ordinals<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            PositionRing::build(0).unwrap_err(),
            ClockError::InvalidSize { size: 0 }
        );
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = PositionRing::build(4).unwrap();
        let last = ring.node_at(3).unwrap();

        assert_eq!(ring.next(last), ring.head());
        assert_eq!(ring.prev(ring.head()), last);
    }

    #[test]
    fn test_single_node_ring_links_to_itself() {
        let ring = PositionRing::build(1).unwrap();
        let head = ring.head();

        assert_eq!(ring.next(head), head);
        assert_eq!(ring.prev(head), head);
        assert_eq!(ring.node(head).ordinal(), 0);
    }

    #[test]
    fn test_node_at_walks_both_directions() {
        let ring = PositionRing::build(60).unwrap();

        // 7 is reached forward, 55 backward
        assert_eq!(ring.node(ring.node_at(7).unwrap()).ordinal(), 7);
        assert_eq!(ring.node(ring.node_at(55).unwrap()).ordinal(), 55);
        assert_eq!(ring.node_at(0).unwrap(), ring.head());
    }

    #[test]
    fn test_node_at_out_of_range() {
        let ring = PositionRing::build(12).unwrap();
        assert_eq!(
            ring.node_at(12).unwrap_err(),
            ClockError::OrdinalOutOfRange {
                ordinal: 12,
                size: 12
            }
        );
    }

    #[test]
    fn test_ordinals_from_wraps() {
        let ring = PositionRing::build(5).unwrap();
        let start = ring.node_at(3).unwrap();

        let lap: Vec<usize> = ring.ordinals_from(start).collect();
        assert_eq!(lap, vec![3, 4, 0, 1, 2]);
    }

    proptest! {
        #[test]
        fn prop_forward_lap_returns_home(size in 1usize..200, start in 0usize..200) {
            let ring = PositionRing::build(size).unwrap();
            let home = ring.node_at(start % size).unwrap();

            let mut cursor = home;
            for _ in 0..size {
                cursor = ring.next(cursor);
            }
            prop_assert_eq!(cursor, home);
        }

        #[test]
        fn prop_prev_undoes_next(size in 1usize..200, ordinal in 0usize..200) {
            let ring = PositionRing::build(size).unwrap();
            let node = ring.node_at(ordinal % size).unwrap();
            prop_assert_eq!(ring.prev(ring.next(node)), node);
        }
    }
}
