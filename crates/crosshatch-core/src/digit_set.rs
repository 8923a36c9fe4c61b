//! Candidate digit sets for a single cell.

use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::Digit;

/// A set of candidate digits (1-9) for a single cell.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, so a board of 81 sets is small enough to clone freely,
/// which is exactly what the search driver does on every branch.
///
/// Iteration is always in ascending digit order; the solver relies on this
/// for deterministic branching.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::new(5));
/// candidates.remove(Digit::new(7));
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::new(5)));
/// assert!(candidates.contains(Digit::new(1)));
/// ```
///
/// # Set operations
///
/// ```
/// use crosshatch_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::new(1), Digit::new(2), Digit::new(3)]);
/// let b = DigitSet::from_iter([Digit::new(2), Digit::new(3), Digit::new(4)]);
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::new(1)]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(0x1ff);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(digit.bit())
    }

    /// Inserts a digit. Returns `true` if the set changed.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 |= digit.bit();
        self.0 != before
    }

    /// Removes a digit. Returns `true` if the set changed.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let before = self.0;
        self.0 &= !digit.bit();
        self.0 != before
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set has exactly one member.
    ///
    /// This is the "solved cell" test: a cell is solved when its candidate
    /// set has exactly one digit.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Some(Digit::new(value))
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitSet {
    /// Renders the candidates as a run of digit characters, e.g. `"237"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
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

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        let digit = Digit::new(value);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
