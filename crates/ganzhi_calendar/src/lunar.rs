//! Solar→lunar conversion and the lunar date type.

use std::fmt::{Display, Formatter};

use crate::error::CalendarError;
use crate::solar::{SolarDateTime, day_number};
use crate::table::{FIRST_YEAR, LAST_YEAR, days_in_month, days_in_year, leap_month};

/// January 31, 1900 is the first day of lunar year 1900.
const EPOCH_DAY_NUMBER: i64 = day_number(FIRST_YEAR, 1, 31);

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// Digit characters for day names, indexed by `day % 10`.
const DAY_DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// A date in the traditional lunisolar calendar.
///
/// Produced by [`solar_to_lunar`]; `month` is always the calendar month
/// number 1-12, with `leap_month` marking a date inside the year's
/// inserted leap month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year, 1900-2099.
    pub year: i32,
    /// Lunar month, 1-12.
    pub month: u8,
    /// Day of the lunar month, 1-30.
    pub day: u8,
    /// Hour carried over from the solar input, 0-23.
    pub hour: u8,
    /// Whether the date falls in the year's leap month.
    pub leap_month: bool,
}

impl LunarDate {
    /// Chinese month name, e.g. "三月" or "闰八月".
    pub fn month_name(&self) -> String {
        let mut name = String::new();
        if self.leap_month {
            name.push('闰');
        }
        name.push_str(MONTH_NAMES[(self.month - 1) as usize]);
        name.push('月');
        name
    }

    /// Chinese day name: 初一 through 初十, then 十一 through 十九,
    /// 二十, 廿一 through 廿九, 三十.
    pub fn day_name(&self) -> String {
        let tens = match self.day {
            1..=10 => "初",
            11..=19 => "十",
            20 => "二",
            21..=29 => "廿",
            _ => "三",
        };
        format!("{tens}{}", DAY_DIGITS[(self.day % 10) as usize])
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}

/// Convert a solar date-time to its lunisolar equivalent.
///
/// Walks the day offset from the 1900-01-31 epoch through whole lunar
/// years, then through the resolved year's month slots. Dates outside
/// the table (input year outside 1900-2099, dates before the epoch, or a
/// walk running past lunar 2099) are errors, never clamped.
pub fn solar_to_lunar(solar: SolarDateTime) -> Result<LunarDate, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&solar.year) {
        return Err(CalendarError::YearOutOfRange { year: solar.year });
    }
    let mut offset = day_number(solar.year, solar.month, solar.day) - EPOCH_DAY_NUMBER;
    if offset < 0 {
        return Err(out_of_range(solar));
    }

    // Year walk. On exit with offset 0 the date is the first day of the
    // year the cursor stopped at; a negative offset means the cursor went
    // one year too far and rolls back.
    let mut year = FIRST_YEAR;
    let mut year_days = 0_i64;
    while year <= LAST_YEAR && offset > 0 {
        year_days = i64::from(days_in_year(year)?);
        offset -= year_days;
        year += 1;
    }
    if offset < 0 {
        offset += year_days;
        year -= 1;
    }
    if year > LAST_YEAR {
        return Err(out_of_range(solar));
    }

    // Month walk over the year's slots, the leap month counting as its
    // own slot. Same rollback rule as the year walk.
    let leap = leap_month(year)?;
    let slots: u8 = if leap == 0 { 12 } else { 13 };
    let mut slot: u8 = 1;
    let mut slot_days = 0_i64;
    while slot <= slots && offset > 0 {
        slot_days = i64::from(days_in_month(year, slot)?);
        offset -= slot_days;
        slot += 1;
    }
    if offset < 0 {
        offset += slot_days;
        slot -= 1;
    }

    // Collapse the slot number back to a calendar month number.
    let (month, is_leap) = if leap > 0 && slot == leap + 1 {
        (leap, true)
    } else if leap > 0 && slot > leap {
        (slot - 1, false)
    } else {
        (slot, false)
    };

    Ok(LunarDate {
        year,
        month,
        day: (offset + 1) as u8,
        hour: solar.hour,
        leap_month: is_leap,
    })
}

fn out_of_range(solar: SolarDateTime) -> CalendarError {
    CalendarError::DateOutOfRange {
        year: solar.year,
        month: solar.month,
        day: solar.day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(year: i32, month: u8, day: u8, hour: u8) -> LunarDate {
        let solar = SolarDateTime::from_ymd_hour(year, month, day, hour).unwrap();
        solar_to_lunar(solar).unwrap()
    }

    #[test]
    fn epoch_is_first_lunar_day() {
        let lunar = convert(1900, 1, 31, 0);
        assert_eq!(
            lunar,
            LunarDate {
                year: 1900,
                month: 1,
                day: 1,
                hour: 0,
                leap_month: false,
            }
        );
    }

    #[test]
    fn year_rollover_at_new_year() {
        // Lunar 1900 has 384 days, so 1901-02-19 starts lunar 1901.
        let eve = convert(1901, 2, 18, 0);
        assert_eq!((eve.year, eve.month, eve.day), (1900, 12, 30));
        assert!(!eve.leap_month);

        let new_year = convert(1901, 2, 19, 0);
        assert_eq!((new_year.year, new_year.month, new_year.day), (1901, 1, 1));
    }

    #[test]
    fn leap_month_traversal() {
        // Lunar 1900 inserts a leap eighth month.
        let before = convert(1900, 9, 23, 0);
        assert_eq!((before.month, before.day, before.leap_month), (8, 30, false));

        let first_leap_day = convert(1900, 9, 24, 0);
        assert_eq!(
            (
                first_leap_day.month,
                first_leap_day.day,
                first_leap_day.leap_month
            ),
            (8, 1, true)
        );

        let after = convert(1900, 10, 23, 0);
        assert_eq!((after.month, after.day, after.leap_month), (9, 1, false));
    }

    #[test]
    fn hour_carried_through() {
        assert_eq!(convert(1990, 4, 14, 11).hour, 11);
        assert_eq!(convert(1990, 4, 14, 23).hour, 23);
    }

    #[test]
    fn rejects_dates_before_epoch() {
        let solar = SolarDateTime::from_ymd_hour(1900, 1, 30, 0).unwrap();
        assert_eq!(
            solar_to_lunar(solar),
            Err(CalendarError::DateOutOfRange {
                year: 1900,
                month: 1,
                day: 30,
            })
        );
    }

    #[test]
    fn rejects_years_outside_table() {
        let early = SolarDateTime::from_ymd_hour(1899, 12, 31, 0).unwrap();
        assert_eq!(
            solar_to_lunar(early),
            Err(CalendarError::YearOutOfRange { year: 1899 })
        );
        let late = SolarDateTime::from_ymd_hour(2100, 1, 1, 0).unwrap();
        assert_eq!(
            solar_to_lunar(late),
            Err(CalendarError::YearOutOfRange { year: 2100 })
        );
    }

    #[test]
    fn end_of_table_still_resolves() {
        // 2099-12-31 falls inside lunar 2099, the last table year.
        let lunar = convert(2099, 12, 31, 0);
        assert_eq!(lunar.year, 2099);
    }

    #[test]
    fn month_names_render() {
        let plain = convert(1990, 4, 14, 11);
        assert_eq!(plain.month_name(), "三月");

        let leap = convert(1900, 9, 24, 0);
        assert_eq!(leap.month_name(), "闰八月");

        let winter = convert(1990, 12, 26, 11);
        assert_eq!(winter.month_name(), "冬月");

        let last = convert(1992, 1, 20, 11);
        assert_eq!(last.month_name(), "腊月");
    }

    #[test]
    fn day_names_render() {
        let first = convert(1900, 9, 24, 0);
        assert_eq!(first.day_name(), "初一");

        let tenth = convert(1990, 12, 26, 11);
        assert_eq!(tenth.day_name(), "初十");

        let nineteenth = convert(1990, 4, 14, 11);
        assert_eq!(nineteenth.day_name(), "十九");

        let twentieth = convert(2017, 4, 16, 11);
        assert_eq!(twentieth.day_name(), "二十");

        let twenty_first = convert(2017, 4, 17, 11);
        assert_eq!(twenty_first.day_name(), "廿一");

        let thirtieth = convert(1901, 2, 18, 0);
        assert_eq!(thirtieth.day_name(), "三十");
    }

    #[test]
    fn full_display() {
        assert_eq!(convert(1990, 4, 14, 11).to_string(), "1990年三月十九");
        assert_eq!(convert(1900, 9, 24, 0).to_string(), "1900年闰八月初一");
        assert_eq!(convert(1992, 1, 20, 11).to_string(), "1991年腊月十六");
    }
}
