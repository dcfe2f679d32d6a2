//! TLE text layout for generated objects
//!
//! Renders the name line and the fixed-column element lines:
//!
//! ```text
//! LEO-VLOW-0001
//! 1 50001U 24001A   146.00000000  .00000000  00000-0  00000-0 0  4821
//! 2 50001  12.3456 210.9876 0012345  45.6789 300.1234 15.51234567 48213
//! ```
//!
//! Widths and precisions are fixed for downstream column parsers. The
//! trailing fields of both lines are random filler, not checksums.

use crate::sampler::SampledElements;
use crate::{CatalogError, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const NAME_WIDTH: usize = 24;

/// Filler for the element-set/checksum tail of line 1
pub const ELEMENT_SET_FILLER: RangeInclusive<u16> = 1000..=9999;

/// Filler for the revolution-number/checksum tail of line 2
pub const REVOLUTION_FILLER: RangeInclusive<u32> = 10_000..=99_999;

/// Epoch shared by every record of a run: YY + fractional day of year
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TleEpoch {
    pub year: u8,
    pub day_of_year: f64,
}

impl Default for TleEpoch {
    fn default() -> Self {
        Self {
            year: 24,
            day_of_year: 146.0,
        }
    }
}

impl TleEpoch {
    pub fn new(year: u8, day_of_year: f64) -> Result<Self> {
        if year > 99 {
            return Err(CatalogError::InvalidEpoch(format!(
                "two-digit year expected, got {}",
                year
            )));
        }
        if !(1.0..367.0).contains(&day_of_year) {
            return Err(CatalogError::InvalidEpoch(format!(
                "day of year {} outside [1, 367)",
                day_of_year
            )));
        }
        Ok(Self { year, day_of_year })
    }

    pub fn from_datetime(epoch: DateTime<Utc>) -> Self {
        let day_of_year = epoch.ordinal() as f64
            + (epoch.hour() as f64 / 24.0)
            + (epoch.minute() as f64 / 1440.0)
            + (epoch.second() as f64 / 86400.0);

        Self {
            year: epoch.year().rem_euclid(100) as u8,
            day_of_year,
        }
    }
}

/// One generated object, ready to render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TleRecord {
    pub name: String,
    pub catalog_number: u32,
    pub elements: SampledElements,
    pub epoch: TleEpoch,
    pub element_set: u16,
    pub revolution_filler: u32,
}

impl TleRecord {
    /// Name left-justified to 24 columns; longer names pass through whole
    pub fn name_line(&self) -> String {
        format!("{:<width$}", self.name, width = NAME_WIDTH)
    }

    /// Line 1: catalog number, classification, designator, epoch, zeroed
    /// drag terms, filler
    pub fn line1(&self) -> String {
        format!(
            "1 {:05}U {:02}001A   {:012.8}  .00000000  00000-0  00000-0 0  {:04}",
            self.catalog_number, self.epoch.year, self.epoch.day_of_year, self.element_set
        )
    }

    /// Line 2: angles (deg), encoded eccentricity, mean motion (rev/day), filler
    pub fn line2(&self) -> String {
        let el = &self.elements;
        format!(
            "2 {:05} {:8.4} {:8.4} {} {:8.4} {:8.4} {:11.8} {:05}",
            self.catalog_number,
            el.inclination_deg,
            el.raan_deg,
            encode_eccentricity(el.eccentricity),
            el.arg_perigee_deg,
            el.mean_anomaly_deg,
            el.mean_motion,
            self.revolution_filler
        )
    }

    /// Name line plus both element lines, no trailing newline
    pub fn to_block(&self) -> String {
        format!("{}\n{}\n{}", self.name_line(), self.line1(), self.line2())
    }
}

/// Eccentricity as seven digits with an implied leading decimal point.
/// Truncates rather than rounds.
pub fn encode_eccentricity(eccentricity: f64) -> String {
    format!("{:07}", (eccentricity * 10_000_000.0) as u32)
}
