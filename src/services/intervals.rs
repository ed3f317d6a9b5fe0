//! Outer/inner interval derivation from a day's envelope.

use crate::api::Interval;
use crate::services::envelope::RiseSetExtremes;

/// Derive the day's two nested intervals from the envelope statistics.
///
/// - **outer** spans earliest rise to latest set: the window during which
///   *some* sample point in the territory is illuminated.
/// - **inner** spans latest rise to earliest set: the window during which
///   *every* sample point is simultaneously illuminated.
///
/// When the latest sunrise lands after the earliest sunset, which happens
/// for a territory wide enough that the easternmost point's evening precedes
/// the westernmost point's morning, the inner interval is empty
/// (`start > end`). That is a valid state the caller must represent, not an
/// error.
///
/// Since `ris_min ≤ ris_max` and `set_min ≤ set_max` by construction of the
/// fold, the inner width never exceeds the outer width.
pub fn encode_intervals(extremes: &RiseSetExtremes) -> (Interval, Interval) {
    let outer = Interval::new(extremes.ris_min, extremes.set_max);
    let inner = Interval::new(extremes.ris_max, extremes.set_min);
    (outer, inner)
}
