//! Bitboard implementation for valid-move sets and disk masks

use super::{Pos, TOTAL_CELLS};

/// Bitboard representation of the 8x8 board.
/// Bit `row * 8 + col` is set when the cell belongs to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (cardinality)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions in ascending index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits & rhs.bits)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Self::Output {
        Bitboard::from_bits(!self.bits)
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut bb = Bitboard::new();
        for pos in iter {
            bb.set(pos);
        }
        bb
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(3, 5);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_ascending() {
        let bb: Bitboard = [Pos::new(7, 7), Pos::new(0, 1), Pos::new(4, 2)]
            .into_iter()
            .collect();
        let cells: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Pos::new(0, 1), Pos::new(4, 2), Pos::new(7, 7)]);
        assert_eq!(bb.iter_ones().len(), 3);
    }

    #[test]
    fn test_bit_ops() {
        let a = Bitboard::from_bits(0b1100);
        let b = Bitboard::from_bits(0b1010);
        assert_eq!((a & b).bits(), 0b1000);
        assert_eq!((a | b).bits(), 0b1110);
        assert_eq!((!Bitboard::new()).count(), 64);
    }
}
