//! Four Pillars (八字) computation over the sexagenary cycle.
//!
//! This crate provides:
//! - the ten Heavenly Stems, twelve Earthly Branches and Five Elements
//! - the year, month, day and hour pillar functions
//! - the assembled eight-characters chart with its element tally

pub mod branch;
pub mod chart;
pub mod element;
pub mod error;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use chart::{EightCharacters, compute_eight_characters};
pub use element::{ALL_ELEMENTS, ElementTally, FiveElement, tally_elements};
pub use error::PillarError;
pub use pillar::{StemBranch, day_pillar, hour_pillar, month_pillar, year_pillar};
pub use stem::{ALL_STEMS, HeavenlyStem};
