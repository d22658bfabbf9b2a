//! The Five Elements (五行) and the per-chart element tally.

use std::fmt::{Display, Formatter};

use crate::pillar::StemBranch;

/// The five elements in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiveElement {
    /// 金
    Metal,
    /// 木
    Wood,
    /// 水
    Water,
    /// 火
    Fire,
    /// 土
    Earth,
}

/// All five elements in tally order (金 first).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Metal,
    FiveElement::Wood,
    FiveElement::Water,
    FiveElement::Fire,
    FiveElement::Earth,
];

impl FiveElement {
    /// Chinese character of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// 0-based index in tally order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// Display code, 1-5 in tally order.
    pub const fn code(self) -> u8 {
        self.index() + 1
    }
}

/// Occurrence counts over the five elements, kept in tally order.
///
/// Renders like "金3 木1 水0 火2 土2"; zero counts stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Empty tally.
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Record one symbol's element.
    pub fn add(&mut self, element: FiveElement) {
        self.counts[element.index() as usize] += 1;
    }

    /// Count recorded for one element.
    pub const fn count(&self, element: FiveElement) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Total symbols recorded.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// `(element, count)` pairs in tally order.
    pub fn iter(&self) -> impl Iterator<Item = (FiveElement, u8)> + '_ {
        ALL_ELEMENTS
            .iter()
            .map(move |&element| (element, self.count(element)))
    }
}

impl Display for ElementTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (element, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{count}", element.name())?;
            first = false;
        }
        Ok(())
    }
}

/// Classify all eight characters of the four pillars and count each
/// element's occurrences. The result always totals eight.
pub fn tally_elements(pillars: &[StemBranch; 4]) -> ElementTally {
    let mut tally = ElementTally::new();
    for pillar in pillars {
        tally.add(pillar.stem.element());
        tally.add(pillar.branch.element());
    }
    tally
}
