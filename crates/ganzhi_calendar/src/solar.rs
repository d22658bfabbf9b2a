//! Solar (Gregorian) date-time input and day arithmetic.

use std::fmt::{Display, Formatter};

use crate::error::CalendarError;

/// A Gregorian calendar date-time.
///
/// Construct through [`SolarDateTime::new`], which validates every field;
/// the rest of the crate assumes the ranges documented here. Minutes and
/// seconds are carried for callers but no conversion reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDateTime {
    /// Gregorian year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1 to the month's length.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl SolarDateTime {
    /// Build a validated date-time.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        if month == 0 || month > 12 || day == 0 || day > days_in_gregorian_month(year, month) {
            return Err(CalendarError::MalformedDate { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::MalformedTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Build a validated date-time with zero minutes and seconds.
    pub fn from_ymd_hour(year: i32, month: u8, day: u8, hour: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, hour, 0, 0)
    }
}

impl Display for SolarDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Gregorian leap year rule.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in a Gregorian month, 0 for a month outside 1-12.
pub const fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Continuous day number of a Gregorian date (its Julian day number at
/// noon). Only differences of these matter to the converter.
pub(crate) const fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}
