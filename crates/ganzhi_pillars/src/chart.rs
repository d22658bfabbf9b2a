//! Full eight-characters computation and its result type.

use ganzhi_calendar::{LunarDate, SolarDateTime, solar_to_lunar};

use crate::element::{ElementTally, tally_elements};
use crate::error::PillarError;
use crate::pillar::{StemBranch, day_pillar, hour_pillar, month_pillar, year_pillar};

/// The four pillars of a moment, together with the dates they were
/// derived from and the element tally over all eight characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightCharacters {
    /// Solar input.
    pub solar: SolarDateTime,
    /// Lunar equivalent of the input.
    pub lunar: LunarDate,
    /// Year pillar, from the lunar year.
    pub year_pillar: StemBranch,
    /// Month pillar, from the lunar month and the year stem.
    pub month_pillar: StemBranch,
    /// Day pillar, from the solar date.
    pub day_pillar: StemBranch,
    /// Hour pillar, from the clock hour and the day stem.
    pub hour_pillar: StemBranch,
    /// Element counts over the eight characters; totals eight.
    pub elements: ElementTally,
}

impl EightCharacters {
    /// The four pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [StemBranch; 4] {
        [
            self.year_pillar,
            self.month_pillar,
            self.day_pillar,
            self.hour_pillar,
        ]
    }

    /// Character rendering, e.g. "庚午 庚辰 己酉 甲午".
    pub fn pillar_names(&self) -> String {
        let [y, m, d, h] = self.pillars();
        format!("{y} {m} {d} {h}")
    }

    /// Numeric rendering, e.g. "0|10 0|8 9|1 4|10".
    pub fn pillar_codes(&self) -> String {
        let [y, m, d, h] = self.pillars();
        format!(
            "{} {} {} {}",
            y.code_pair(),
            m.code_pair(),
            d.code_pair(),
            h.code_pair()
        )
    }
}

/// Compute the eight characters of a solar date-time.
///
/// The moment first resolves to its lunar date; the year and month
/// pillars come from the lunar year and month (a leap month under its
/// host month), the day pillar from the solar date, and the hour pillar
/// from the clock hour and the day stem.
pub fn compute_eight_characters(solar: SolarDateTime) -> Result<EightCharacters, PillarError> {
    let lunar = solar_to_lunar(solar)?;
    let year = year_pillar(lunar.year)?;
    let month = month_pillar(year.stem, lunar.month)?;
    let day = day_pillar(solar.year, solar.month, solar.day)?;
    let hour = hour_pillar(day.stem, solar.hour)?;
    let pillars = [year, month, day, hour];
    Ok(EightCharacters {
        solar,
        lunar,
        year_pillar: year,
        month_pillar: month,
        day_pillar: day,
        hour_pillar: hour,
        elements: tally_elements(&pillars),
    })
}
