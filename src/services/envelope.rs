//! Per-day rise/set envelope aggregation.
//!
//! For one territory and one day, evaluates the rise/set solver over every
//! coordinate sample and reduces to four statistics: earliest and latest
//! sunrise, earliest and latest sunset. Circumpolar outcomes exclude the
//! sample from the day's fold; they are expected, recoverable conditions,
//! not errors.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::models::{ModifiedJulianDate, Territory};
use crate::solar::rise_set::{next_sunrise, next_sunset, RiseSetOutcome, SolverError};

/// The four per-day envelope statistics.
///
/// Grouped in one struct so "all present" and "all absent" are the only
/// representable states of a [`DayEnvelope`]; there is no sentinel value
/// standing in for "no minimum seen yet".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSetExtremes {
    /// Earliest sunrise across the territory's samples
    pub ris_min: ModifiedJulianDate,
    /// Latest sunrise across the territory's samples
    pub ris_max: ModifiedJulianDate,
    /// Earliest sunset across the territory's samples
    pub set_min: ModifiedJulianDate,
    /// Latest sunset across the territory's samples
    pub set_max: ModifiedJulianDate,
}

impl RiseSetExtremes {
    fn from_pair(rise: ModifiedJulianDate, set: ModifiedJulianDate) -> Self {
        Self {
            ris_min: rise,
            ris_max: rise,
            set_min: set,
            set_max: set,
        }
    }

    /// Elementwise min/max fold; commutative and associative.
    fn merge_pair(&mut self, rise: ModifiedJulianDate, set: ModifiedJulianDate) {
        if rise.value() < self.ris_min.value() {
            self.ris_min = rise;
        }
        if rise.value() > self.ris_max.value() {
            self.ris_max = rise;
        }
        if set.value() < self.set_min.value() {
            self.set_min = set;
        }
        if set.value() > self.set_max.value() {
            self.set_max = set;
        }
    }
}

/// Rise/set envelope of one territory on one surveyed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEnvelope {
    pub territory_name: String,
    pub day_index: usize,
    /// `None` when no sample produced a rise-then-set pair that day, i.e.
    /// the whole territory sat in circumpolar day or night.
    pub extremes: Option<RiseSetExtremes>,
}

/// Fold rise/set pairs across every sample of `territory` for the day
/// starting at `day_start` (UTC midnight).
///
/// Per sample: find the next sunrise after `day_start`; a circumpolar
/// outcome excludes the sample for the day. On a rise at `r`, find the next
/// sunset after `r`; a circumpolar outcome there excludes the sample too
/// (guards a degenerate near-pole transition). Otherwise the pair `(r, s)`
/// joins the elementwise min/max fold. Because the fold is commutative and
/// associative, sample order never affects the result.
pub fn compute_envelope(
    territory: &Territory,
    day_index: usize,
    day_start: ModifiedJulianDate,
    config: &SolverConfig,
) -> Result<DayEnvelope, SolverError> {
    debug_assert!(!territory.coordinates.is_empty());

    let mut extremes: Option<RiseSetExtremes> = None;

    for coord in &territory.coordinates {
        let rise = match next_sunrise(coord, day_start, config)? {
            RiseSetOutcome::Rose(t) => t,
            outcome => {
                debug!(
                    "{}: sample (lon={}, lat={}) excluded from day {}: {:?}",
                    territory.name,
                    coord.lon_deg.value(),
                    coord.lat_deg.value(),
                    day_index,
                    outcome
                );
                continue;
            }
        };

        let set = match next_sunset(coord, rise, config)? {
            RiseSetOutcome::Set(t) => t,
            outcome => {
                debug!(
                    "{}: sample (lon={}, lat={}) rose but did not set on day {}: {:?}",
                    territory.name,
                    coord.lon_deg.value(),
                    coord.lat_deg.value(),
                    day_index,
                    outcome
                );
                continue;
            }
        };

        match extremes.as_mut() {
            Some(running) => running.merge_pair(rise, set),
            None => extremes = Some(RiseSetExtremes::from_pair(rise, set)),
        }
    }

    Ok(DayEnvelope {
        territory_name: territory.name.clone(),
        day_index,
        extremes,
    })
}
