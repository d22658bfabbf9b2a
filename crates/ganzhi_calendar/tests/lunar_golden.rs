//! Golden tests pinning the solar→lunar converter to hand-checked dates.
//!
//! Expected values were worked out against the packed table by hand and
//! cross-checked with published lunar calendars.

use ganzhi_calendar::{
    CalendarError, LunarDate, SolarDateTime, days_in_gregorian_month, solar_to_lunar,
};

fn convert(year: i32, month: u8, day: u8, hour: u8) -> LunarDate {
    let solar = SolarDateTime::from_ymd_hour(year, month, day, hour)
        .unwrap_or_else(|e| panic!("bad fixture {year}-{month}-{day}: {e}"));
    solar_to_lunar(solar).unwrap_or_else(|e| panic!("fixture {year}-{month}-{day} failed: {e}"))
}

// ---------------------------------------------------------------------------
// Fixed dates
// ---------------------------------------------------------------------------

#[test]
fn golden_1990_04_14() {
    let lunar = convert(1990, 4, 14, 11);
    assert_eq!(
        lunar,
        LunarDate {
            year: 1990,
            month: 3,
            day: 19,
            hour: 11,
            leap_month: false,
        }
    );
    assert_eq!(lunar.to_string(), "1990年三月十九");
}

#[test]
fn golden_2017_04_14() {
    let lunar = convert(2017, 4, 14, 11);
    assert_eq!(
        lunar,
        LunarDate {
            year: 2017,
            month: 3,
            day: 18,
            hour: 11,
            leap_month: false,
        }
    );
    assert_eq!(lunar.to_string(), "2017年三月十八");
}

#[test]
fn golden_1992_01_20() {
    // January before the lunar new year resolves to the previous lunar year.
    let lunar = convert(1992, 1, 20, 11);
    assert_eq!(
        lunar,
        LunarDate {
            year: 1991,
            month: 12,
            day: 16,
            hour: 11,
            leap_month: false,
        }
    );
    assert_eq!(lunar.to_string(), "1991年腊月十六");
}

#[test]
fn golden_1990_12_26() {
    let lunar = convert(1990, 12, 26, 11);
    assert_eq!(
        lunar,
        LunarDate {
            year: 1990,
            month: 11,
            day: 10,
            hour: 11,
            leap_month: false,
        }
    );
    assert_eq!(lunar.to_string(), "1990年冬月初十");
}

#[test]
fn golden_leap_month_1900() {
    let lunar = convert(1900, 9, 24, 0);
    assert_eq!(
        lunar,
        LunarDate {
            year: 1900,
            month: 8,
            day: 1,
            hour: 0,
            leap_month: true,
        }
    );
    assert_eq!(lunar.to_string(), "1900年闰八月初一");
}

// ---------------------------------------------------------------------------
// Boundary behavior
// ---------------------------------------------------------------------------

#[test]
fn golden_epoch_and_rollover() {
    let epoch = convert(1900, 1, 31, 0);
    assert_eq!((epoch.year, epoch.month, epoch.day), (1900, 1, 1));

    let eve = convert(1901, 2, 18, 0);
    assert_eq!((eve.year, eve.month, eve.day), (1900, 12, 30));

    let next = convert(1901, 2, 19, 0);
    assert_eq!((next.year, next.month, next.day), (1901, 1, 1));
}

#[test]
fn golden_range_errors() {
    let before_epoch = SolarDateTime::from_ymd_hour(1900, 1, 1, 0).unwrap();
    assert!(matches!(
        solar_to_lunar(before_epoch),
        Err(CalendarError::DateOutOfRange { .. })
    ));

    let too_early = SolarDateTime::from_ymd_hour(1899, 6, 1, 0).unwrap();
    assert!(matches!(
        solar_to_lunar(too_early),
        Err(CalendarError::YearOutOfRange { year: 1899 })
    ));

    let too_late = SolarDateTime::from_ymd_hour(2100, 6, 1, 0).unwrap();
    assert!(matches!(
        solar_to_lunar(too_late),
        Err(CalendarError::YearOutOfRange { year: 2100 })
    ));
}

#[test]
fn conversion_is_deterministic() {
    let solar = SolarDateTime::from_ymd_hour(2017, 4, 14, 11).unwrap();
    let first = solar_to_lunar(solar).unwrap();
    for _ in 0..10 {
        assert_eq!(solar_to_lunar(solar).unwrap(), first);
    }
}

// ---------------------------------------------------------------------------
// Continuity sweep
// ---------------------------------------------------------------------------

#[test]
fn consecutive_days_stay_consecutive() {
    // Sweep solar 1990 (which crosses the leap fifth lunar month) and
    // check every step moves the lunar date by exactly one day: day + 1
    // inside a month, or day 1 of the next month after a 29/30 day end.
    let mut prev = convert(1990, 1, 1, 0);
    for month in 1..=12_u8 {
        for day in 1..=days_in_gregorian_month(1990, month) {
            if month == 1 && day == 1 {
                continue;
            }
            let next = convert(1990, month, day, 0);
            if next.day == prev.day + 1 {
                assert_eq!(
                    (next.year, next.month, next.leap_month),
                    (prev.year, prev.month, prev.leap_month),
                    "1990-{month:02}-{day:02} changed month without resetting day"
                );
            } else {
                assert_eq!(next.day, 1, "1990-{month:02}-{day:02} skipped days");
                assert!(
                    prev.day >= 29,
                    "1990-{month:02}-{day:02}: previous month ended at day {}",
                    prev.day
                );
            }
            prev = next;
        }
    }
}
