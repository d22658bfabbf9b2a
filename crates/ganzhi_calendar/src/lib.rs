//! Traditional lunisolar calendar conversion for 1900-2099.
//!
//! This crate provides:
//! - the packed 200-year lunar table and its decoders
//! - a validated Gregorian date-time input type
//! - the solar→lunar day-offset converter with Chinese date rendering

pub mod error;
pub mod lunar;
pub mod solar;
pub mod table;

pub use error::CalendarError;
pub use lunar::{LunarDate, solar_to_lunar};
pub use solar::{SolarDateTime, days_in_gregorian_month, is_gregorian_leap_year};
pub use table::{FIRST_YEAR, LAST_YEAR, days_in_month, days_in_year, leap_month};
