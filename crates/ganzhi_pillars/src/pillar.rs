//! The four pillar functions over the sexagenary cycle.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::PillarError;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// One pillar: an ordered stem/branch pair such as 庚午.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    /// Heavenly stem.
    pub stem: HeavenlyStem,
    /// Earthly branch.
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Numeric rendering "stemCode|branchCode", e.g. 庚午 → "0|10".
    pub fn code_pair(&self) -> String {
        format!("{}|{}", self.stem.code(), self.branch.code())
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Month-stem rows keyed by the year stem's class (`index % 5`); entry
/// `m - 1` holds the 0-based stem index of lunar month `m`. The rows
/// start at 丙, 戊, 庚, 壬 and 甲 and advance one stem per month.
const MONTH_STEM_TABLE: [[u8; 12]; 5] = [
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3],
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5],
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7],
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1],
];

fn stem_at(position: i64, what: &'static str) -> Result<HeavenlyStem, PillarError> {
    let index = position.rem_euclid(10) as usize;
    ALL_STEMS
        .get(index)
        .copied()
        .ok_or(PillarError::InvariantViolation(what))
}

fn branch_at(position: i64, what: &'static str) -> Result<EarthlyBranch, PillarError> {
    let index = position.rem_euclid(12) as usize;
    ALL_BRANCHES
        .get(index)
        .copied()
        .ok_or(PillarError::InvariantViolation(what))
}

/// Year pillar of a lunar year.
///
/// The 60-year cycle is anchored so that a raw year with remainder 4
/// maps to stem 甲 and branch 子; 1984 is 甲子.
pub fn year_pillar(lunar_year: i32) -> Result<StemBranch, PillarError> {
    let base = i64::from(lunar_year) - 4;
    Ok(StemBranch {
        stem: stem_at(base, "year stem cycle")?,
        branch: branch_at(base, "year branch cycle")?,
    })
}

/// Month pillar of a lunar month under a given year stem.
///
/// The branch is fixed by the month alone, 寅 for month 1 through 丑 for
/// month 12; the stem comes from the five-tigers table row of the year
/// stem. A leap month shares its host month's pillar, so callers pass
/// the calendar month number.
pub fn month_pillar(year_stem: HeavenlyStem, lunar_month: u8) -> Result<StemBranch, PillarError> {
    if lunar_month == 0 || lunar_month > 12 {
        return Err(PillarError::InvariantViolation("lunar month outside 1-12"));
    }
    let row = &MONTH_STEM_TABLE[(year_stem.index() % 5) as usize];
    let stem = HeavenlyStem::from_index(row[(lunar_month - 1) as usize])
        .ok_or(PillarError::InvariantViolation("month stem table entry"))?;
    Ok(StemBranch {
        stem,
        branch: branch_at(i64::from(lunar_month) + 1, "month branch cycle")?,
    })
}

/// Day pillar of a solar date.
///
/// Uses the congruence form of the sexagenary day count: January and
/// February count as months 13 and 14 of the previous year, and the
/// century/remainder split reuses that shifted year in both sub-formulas.
/// Defined for dates in the supported 1900-2099 era.
pub fn day_pillar(year: i32, month: u8, day: u8) -> Result<StemBranch, PillarError> {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let d = i64::from(day);
    let c = y / 100;
    let u = y % 100;
    let shared = c / 4 + 5 * u + u / 4 + 3 * (m + 1) / 5 + d;
    let stem_number = 4 * c + shared - 3;
    let branch_number = 8 * c + shared + 7 + if m % 2 == 0 { 6 } else { 0 };
    Ok(StemBranch {
        stem: stem_at(stem_number - 1, "day stem congruence")?,
        branch: branch_at(branch_number - 1, "day branch congruence")?,
    })
}

/// Hour pillar from the day stem and the clock hour.
///
/// The branch is the two-hour window of the hour; the stem depends only
/// on the day stem (the five-rats rule: 甲己 days open at 甲, 乙庚 at 丙,
/// 丙辛 at 戊, 丁壬 at 庚, 戊癸 at 壬).
pub fn hour_pillar(day_stem: HeavenlyStem, hour: u8) -> Result<StemBranch, PillarError> {
    let branch = EarthlyBranch::from_hour(hour)
        .ok_or(PillarError::InvariantViolation("clock hour outside 0-23"))?;
    Ok(StemBranch {
        stem: stem_at(i64::from(day_stem.index()) * 2, "hour stem rule")?,
        branch,
    })
}
