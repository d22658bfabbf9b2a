//! Error types for solar validation and lunar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar date validation or solar→lunar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Calendar fields do not form a real Gregorian date.
    MalformedDate {
        /// Offending year.
        year: i32,
        /// Offending month.
        month: u8,
        /// Offending day.
        day: u8,
    },
    /// Clock fields out of range (hour 0-23, minute and second 0-59).
    MalformedTime {
        /// Offending hour.
        hour: u8,
        /// Offending minute.
        minute: u8,
        /// Offending second.
        second: u8,
    },
    /// Year outside the lunar table range 1900-2099.
    YearOutOfRange {
        /// Offending year.
        year: i32,
    },
    /// Date cannot be resolved inside the lunar table: it falls before the
    /// 1900-01-31 epoch or past lunar year 2099.
    DateOutOfRange {
        /// Offending solar year.
        year: i32,
        /// Offending solar month.
        month: u8,
        /// Offending solar day.
        day: u8,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate { year, month, day } => {
                write!(f, "not a Gregorian date: {year:04}-{month:02}-{day:02}")
            }
            Self::MalformedTime {
                hour,
                minute,
                second,
            } => {
                write!(f, "not a clock time: {hour:02}:{minute:02}:{second:02}")
            }
            Self::YearOutOfRange { year } => {
                write!(f, "year {year} outside supported range 1900-2099")
            }
            Self::DateOutOfRange { year, month, day } => {
                write!(
                    f,
                    "date {year:04}-{month:02}-{day:02} outside the lunar table \
                     (1900-01-31 through lunar 2099)"
                )
            }
        }
    }
}

impl Error for CalendarError {}
