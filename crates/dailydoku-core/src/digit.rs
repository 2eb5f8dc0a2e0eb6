//! The digit vocabulary of the 9x9 grid.

use std::fmt::{self, Display};

/// One of the nine digits a cell can hold.
///
/// Wire payloads carry cell values as raw `u8`s (with 0 for empty); this
/// type is the validated in-engine form, so everything past the boundary
/// can rely on the 1-9 range without re-checking it. The discriminant is
/// the digit's numeric value.
///
/// # Examples
///
/// ```
/// use dailydoku_core::Digit;
///
/// assert_eq!(Digit::try_from_value(3), Some(Digit::D3));
/// assert_eq!(Digit::try_from_value(0), None);
/// assert_eq!(u8::from(Digit::D9), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Every digit, in ascending order.
    ///
    /// Solver scan order depends on this ordering, so it is part of the
    /// contract, not a convenience.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Converts a raw value, panicking outside 1-9.
    ///
    /// For boundary input use [`try_from_value`](Self::try_from_value);
    /// this is for values the caller has already range-checked.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("invalid digit value: {value}"))
    }

    /// Converts a raw value, returning `None` outside 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value, 1-9.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
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
    fn test_all_is_ascending_and_complete() {
        assert_eq!(Digit::ALL.len(), 9);
        for (index, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), index + 1);
        }
        assert!(Digit::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_value_round_trips() {
        for value in 1..=9 {
            let digit = Digit::try_from_value(value).unwrap();
            assert_eq!(digit.value(), value);
            assert_eq!(Digit::from_value(value), digit);
            assert_eq!(u8::from(digit), value);
        }
    }

    #[test]
    fn test_boundary_values_rejected() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(u8::MAX), None);
    }

    #[test]
    #[should_panic(expected = "invalid digit value: 10")]
    fn test_from_value_panics_past_nine() {
        let _ = Digit::from_value(10);
    }

    #[test]
    fn test_display_matches_value() {
        for digit in Digit::ALL {
            assert_eq!(digit.to_string(), digit.value().to_string());
        }
    }
}
