//! Public output surface of the survey engine.
//!
//! This file consolidates the DTO types handed to the rendering collaborator.
//! All types derive Serialize/Deserialize for JSON hand-off.

pub use crate::models::GeoCoordinate;
pub use crate::models::ModifiedJulianDate;
pub use crate::models::Territory;
pub use crate::models::TerritoryError;
pub use crate::services::envelope::DayEnvelope;
pub use crate::services::envelope::RiseSetExtremes;
pub use crate::solar::rise_set::RiseSetOutcome;

use serde::{Deserialize, Serialize};

/// Stable zero-based territory row index.
///
/// Assigned from the name-sorted territory order. The renderer keys row
/// placement and its cyclic color ramp off this value, so its stability
/// across runs over the same territory set is a contract, not an
/// implementation detail.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TerritoryIndex(pub usize);

impl TerritoryIndex {
    pub fn new(value: usize) -> Self {
        TerritoryIndex(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TerritoryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time interval between two MJD instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start instant in MJD
    pub start: ModifiedJulianDate,
    /// End instant in MJD
    pub end: ModifiedJulianDate,
}

impl Interval {
    pub fn new(start: ModifiedJulianDate, end: ModifiedJulianDate) -> Self {
        Self { start, end }
    }

    /// True when `start` lies after `end`. For the inner daylight interval
    /// this denotes "no instant of universal daylight", a valid state the
    /// renderer must be able to represent, not an error.
    pub fn is_empty(&self) -> bool {
        self.start.value() > self.end.value()
    }

    /// Signed width in days; negative exactly when the interval is empty.
    pub fn width(&self) -> qtty::Days {
        qtty::Days::new(self.end.value() - self.start.value())
    }
}

/// One (territory, day) output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRecord {
    /// Stable row/color index from the name-sorted territory order
    pub territory_index: TerritoryIndex,
    /// Territory display name (bar label)
    pub territory_name: String,
    /// Zero-based day offset from the survey start date
    pub day_index: usize,
    /// Window during which some sample point is in daylight
    pub outer: Interval,
    /// Window during which every sample point is in daylight; may be empty
    pub inner: Interval,
}

/// Complete survey output: ordered records plus rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    /// Records ordered by territory index, then day index
    pub records: Vec<TimelineRecord>,
    /// Number of surveyed territories (color ramp denominator)
    pub territory_count: usize,
    /// First day index of the suggested display window
    pub display_first_day: usize,
    /// Last day index (inclusive) of the suggested display window
    pub display_last_day: usize,
}
