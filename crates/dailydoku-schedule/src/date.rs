//! Calendar day keys and the small amount of calendar arithmetic the
//! scheduler needs.
//!
//! All dates are plain UTC calendar days; the engine never reads a clock.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Error raised for out-of-range or unparseable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DateError {
    /// The year/month/day combination is not a real calendar day.
    #[display("{year:04}-{month:02}-{day:02} is not a valid calendar day")]
    OutOfRange {
        /// Year component.
        year: u16,
        /// Month component.
        month: u8,
        /// Day component.
        day: u8,
    },
    /// The text form was not `YYYY-MM-DD`.
    #[display("date must be formatted as YYYY-MM-DD")]
    Malformed,
}

/// A UTC calendar day (4-digit year, 2-digit month, 2-digit day).
///
/// The text form is `YYYY-MM-DD` in both directions.
///
/// # Examples
///
/// ```
/// use dailydoku_schedule::DateKey;
///
/// let key: DateKey = "2026-08-23".parse()?;
/// assert_eq!(key.to_string(), "2026-08-23");
/// assert_eq!((key.year(), key.month(), key.day()), (2026, 8, 23));
/// # Ok::<(), dailydoku_schedule::DateError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DateKey {
    year: u16,
    month: u8,
    day: u8,
}

impl DateKey {
    /// Creates a date key, validating that the day exists in the month.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] for impossible dates.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year == 0
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
        {
            return Err(DateError::OutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1-based).
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of week, with 0 = Monday through 6 = Sunday.
    #[must_use]
    pub fn weekday(self) -> u8 {
        day_of_week_monday0(self.year, self.month, self.day)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        let mut parts = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::Malformed);
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(DateError::Malformed);
        }
        let year: u16 = year.parse().map_err(|_| DateError::Malformed)?;
        let month: u8 = month.parse().map_err(|_| DateError::Malformed)?;
        let day: u8 = day.parse().map_err(|_| DateError::Malformed)?;
        Self::new(year, month, day)
    }
}

/// Returns `true` for Gregorian leap years.
#[must_use]
pub fn is_leap_year(year: u16) -> bool {
    year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
}

/// Returns the number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is not in the range 1-12.
#[must_use]
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("invalid month: {month}"),
    }
}

/// Sakamoto's day-of-week algorithm, remapped to 0 = Monday.
fn day_of_week_monday0(year: u16, month: u8, day: u8) -> u8 {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let mut y = u32::from(year);
    if month < 3 {
        y -= 1;
    }
    let sunday0 =
        (y + y / 4 - y / 100 + y / 400 + OFFSETS[usize::from(month) - 1] + u32::from(day)) % 7;
    #[expect(clippy::cast_possible_truncation)]
    let sunday0 = sunday0 as u8;
    (sunday0 + 6) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_round_trip() {
        let key: DateKey = "2026-02-28".parse().unwrap();
        assert_eq!(key.to_string(), "2026-02-28");
        assert_eq!(key, DateKey::new(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(DateKey::new(2026, 2, 29).is_err());
        assert!(DateKey::new(2024, 2, 29).is_ok());
        assert!(DateKey::new(2026, 13, 1).is_err());
        assert!(DateKey::new(2026, 0, 1).is_err());
        assert!(DateKey::new(2026, 4, 31).is_err());
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert_eq!("20260823".parse::<DateKey>(), Err(DateError::Malformed));
        assert_eq!("2026-8-23".parse::<DateKey>(), Err(DateError::Malformed));
        assert_eq!(
            "2026-08-23-1".parse::<DateKey>(),
            Err(DateError::Malformed)
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_weekday() {
        // 2000-01-01 was a Saturday, 2026-08-23 a Sunday, 2026-08-24 a Monday
        assert_eq!(DateKey::new(2000, 1, 1).unwrap().weekday(), 5);
        assert_eq!(DateKey::new(2026, 8, 23).unwrap().weekday(), 6);
        assert_eq!(DateKey::new(2026, 8, 24).unwrap().weekday(), 0);
    }
}
