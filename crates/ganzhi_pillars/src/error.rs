//! Error types for pillar computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_calendar::CalendarError;

/// Errors from four-pillars computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// Error from solar validation or solar→lunar conversion.
    Calendar(CalendarError),
    /// A lookup the cycle arithmetic guarantees to hit found nothing.
    /// Always a defect in this crate, never recovered from.
    InvariantViolation(&'static str),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::InvariantViolation(what) => write!(f, "internal invariant violated: {what}"),
        }
    }
}

impl Error for PillarError {}

impl From<CalendarError> for PillarError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
