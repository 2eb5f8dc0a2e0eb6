//! A set of digits 1-9 backed by a 9-bit mask.
//!
//! [`DigitSet`] is the candidate-mask representation used throughout the
//! engine: bit `n` of the underlying `u16` represents digit `n + 1`. It is
//! derived state, cheap to copy, and never stored long-term.
//!
//! # Examples
//!
//! ```
//! use dailydoku_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Not},
};

use serde::{Deserialize, Serialize};

use crate::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Bits 0-8 of the underlying `u16` represent digits 1-9 respectively.
/// Iteration yields digits in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Creates a set from a raw bit pattern, returning `None` if any bit
    /// outside 0-8 is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns the raw bit pattern (bits 0-8).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << (digit.value() - 1);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << (digit.value() - 1));
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << (digit.value() - 1)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit if the set contains exactly one, `None`
    /// otherwise.
    ///
    /// This is the Naked Single detection primitive.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Digit::try_from_value(self.bits.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_set() -> impl Strategy<Value = DigitSet> {
        (0u16..=MASK).prop_map(|bits| DigitSet::try_from_bits(bits).unwrap())
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_digit(Digit::D4).as_single(), Some(Digit::D4));
    }

    #[test]
    fn test_iteration_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5, Digit::D3]
            .into_iter()
            .collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_try_from_bits() {
        assert_eq!(DigitSet::try_from_bits(0), Some(DigitSet::EMPTY));
        assert_eq!(DigitSet::try_from_bits(MASK), Some(DigitSet::FULL));
        assert_eq!(DigitSet::try_from_bits(1 << 9), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    proptest! {
        #[test]
        fn prop_union_commutes(a in arb_set(), b in arb_set()) {
            prop_assert_eq!(a.union(b), b.union(a));
        }

        #[test]
        fn prop_difference_disjoint_from_other(a in arb_set(), b in arb_set()) {
            prop_assert_eq!(a.difference(b).intersection(b), DigitSet::EMPTY);
        }

        #[test]
        fn prop_complement_partitions(a in arb_set()) {
            prop_assert_eq!(a.union(!a), DigitSet::FULL);
            prop_assert_eq!(a.intersection(!a), DigitSet::EMPTY);
        }

        #[test]
        fn prop_len_matches_iter(a in arb_set()) {
            prop_assert_eq!(a.len() as usize, a.iter().count());
        }
    }
}
