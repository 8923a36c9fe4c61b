//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// The constructor asserts the range, so a `Digit` value is always valid and
/// the rest of the crate never re-checks it.
///
/// # Examples
///
/// ```
/// use crosshatch_core::Digit;
///
/// let digit = Digit::new(5);
/// assert_eq!(digit.value(), 5);
///
/// // Parse from a puzzle character
/// assert_eq!(Digit::from_char('7'), Some(Digit::new(7)));
/// assert_eq!(Digit::from_char('.'), None);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(1); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self(i as u8 + 1);
            i += 1;
        }
        all
    };

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(matches!(value, 1..=9), "digit must be between 1 and 9");
        Self(value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parses a digit from a puzzle character (`'1'`-`'9'`).
    ///
    /// Returns `None` for any other character, including placeholder
    /// characters such as `'.'` and `'0'`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='9' => Some(Self(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Returns the puzzle character for this digit (`'1'`-`'9'`).
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Bit position of this digit in a [`DigitSet`](crate::DigitSet).
    pub(crate) const fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::new(1).value(), 1);
        assert_eq!(Digit::new(9).value(), 9);

        assert_eq!(Digit::ALL.len(), 9);
        assert_eq!(Digit::ALL[0], Digit::new(1));
        assert_eq!(Digit::ALL[8], Digit::new(9));

        assert_eq!(format!("{}", Digit::new(4)), "4");
        let value: u8 = Digit::new(5).into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_char_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_char(digit.to_char()), Some(digit));
        }
        assert_eq!(Digit::from_char('.'), None);
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('a'), None);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9")]
    fn test_new_zero_panics() {
        let _ = Digit::new(0);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9")]
    fn test_new_ten_panics() {
        let _ = Digit::new(10);
    }
}
