//! Clock hands - cursors over a position ring

use std::sync::Arc;

use reloj_core::{ClockResult, FULL_TURN};

use crate::{NodeIndex, PositionRing};

/// Raised when a hand wraps from its last position back to 0
pub type CarryFlag = bool;

/// Raised when a hand steps backward off position 0
pub type BorrowFlag = bool;

/// A moving reference into a shared, immutable ring
/// INVARIANT: `current` is always a node of `ring`
#[derive(Clone, Debug)]
pub struct Hand {
    ring: Arc<PositionRing>,
    current: NodeIndex,
    ring_size: usize,
}

impl Hand {
    /// Create a hand resting on position 0
    pub fn new(ring: Arc<PositionRing>) -> Self {
        let current = ring.head();
        let ring_size = ring.size();
        Hand {
            ring,
            current,
            ring_size,
        }
    }

    /// Move to the forward neighbor
    /// Carry is detected by landing on ordinal 0, never by comparing counts
    #[inline]
    pub fn advance_one(&mut self) -> CarryFlag {
        self.current = self.ring.next(self.current);
        self.ordinal() == 0
    }

    /// Move to the backward neighbor
    #[inline]
    pub fn retreat_one(&mut self) -> BorrowFlag {
        let leaving_zero = self.ordinal() == 0;
        self.current = self.ring.prev(self.current);
        leaving_zero
    }

    /// Current angle in degrees, in [0, 360)
    #[inline]
    pub fn angle(&self) -> f64 {
        self.ordinal() as f64 * (FULL_TURN / self.ring_size as f64)
    }

    /// Seed the hand onto `ordinal`
    pub fn reset(&mut self, ordinal: usize) -> ClockResult<()> {
        self.current = self.ring.node_at(ordinal)?;
        Ok(())
    }

    /// Return to position 0
    #[inline]
    pub fn rewind(&mut self) {
        self.current = self.ring.head();
    }

    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ring.node(self.current).ordinal()
    }

    #[inline]
    pub fn current(&self) -> NodeIndex {
        self.current
    }

    #[inline]
    pub fn ring_size(&self) -> usize {
        self.ring_size
    }

    pub fn ring(&self) -> &Arc<PositionRing> {
        &self.ring
    }

    /// Place the cursor on a node already resolved against this hand's ring
    pub(crate) fn place(&mut self, node: NodeIndex) {
        self.current = node;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reloj_core::ClockError;

    fn hand(size: usize) -> Hand {
        Hand::new(Arc::new(PositionRing::build(size).unwrap()))
    }

    #[test]
    fn test_advance_carries_on_wrap_only() {
        let mut h = hand(3);

        assert!(!h.advance_one());
        assert_eq!(h.ordinal(), 1);
        assert!(!h.advance_one());
        assert!(h.advance_one());
        assert_eq!(h.ordinal(), 0);
    }

    #[test]
    fn test_retreat_borrows_leaving_zero() {
        let mut h = hand(60);

        assert!(h.retreat_one());
        assert_eq!(h.ordinal(), 59);
        assert!(!h.retreat_one());
        assert_eq!(h.ordinal(), 58);
    }

    #[test]
    fn test_angle() {
        let mut h = hand(60);
        assert_eq!(h.angle(), 0.0);
        h.advance_one();
        assert_eq!(h.angle(), 6.0);

        let mut hours = hand(12);
        hours.reset(3).unwrap();
        assert_eq!(hours.angle(), 90.0);
    }

    #[test]
    fn test_reset_and_rewind() {
        let mut h = hand(60);
        h.reset(42).unwrap();
        assert_eq!(h.ordinal(), 42);

        assert_eq!(
            h.reset(60).unwrap_err(),
            ClockError::OrdinalOutOfRange {
                ordinal: 60,
                size: 60
            }
        );
        assert_eq!(h.ordinal(), 42);

        h.rewind();
        assert_eq!(h.ordinal(), 0);
    }

    #[test]
    fn test_hands_share_a_ring() {
        let ring = Arc::new(PositionRing::build(60).unwrap());
        let mut a = Hand::new(Arc::clone(&ring));
        let b = Hand::new(ring);

        a.advance_one();
        assert_eq!(a.ordinal(), 1);
        assert_eq!(b.ordinal(), 0);
    }

    proptest! {
        #[test]
        fn prop_full_lap_carries_exactly_once(size in 1usize..150, start in 0usize..150) {
            let mut h = hand(size);
            h.reset(start % size).unwrap();
            let home = h.current();

            let carries: Vec<bool> = (0..size).map(|_| h.advance_one()).collect();

            prop_assert_eq!(h.current(), home);
            prop_assert_eq!(carries.iter().filter(|c| **c).count(), 1);
            if start % size == 0 {
                prop_assert!(carries[size - 1]);
            }
        }

        #[test]
        fn prop_angle_in_range(size in 1usize..150, steps in 0usize..500) {
            let mut h = hand(size);
            for _ in 0..steps {
                h.advance_one();
            }
            prop_assert!(h.angle() >= 0.0 && h.angle() < 360.0);
        }
    }
}
