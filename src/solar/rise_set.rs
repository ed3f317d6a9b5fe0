//! Sunrise/sunset root finding.
//!
//! The solver brackets a horizon crossing of the altitude function with a
//! coarse forward scan over the search window, then bisects the bracket down
//! to the configured tolerance. Both the iteration budget and the tolerance
//! live on [`SolverConfig`](crate::config::SolverConfig); exhausting the
//! budget is reported as an error carrying the offending coordinate and
//! instant, never coerced into a circumpolar outcome.

use crate::config::SolverConfig;
use crate::models::{GeoCoordinate, ModifiedJulianDate};
use crate::solar::position::sun_altitude;

/// Result of one astronomical rise or set query.
///
/// Replaces exception-style signaling: callers must handle the circumpolar
/// cases exhaustively, and both are ordinary outcomes rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetOutcome {
    /// The Sun crossed the horizon upward at this instant.
    Rose(ModifiedJulianDate),
    /// The Sun crossed the horizon downward at this instant.
    Set(ModifiedJulianDate),
    /// No crossing inside the search window and the Sun was up at its start
    /// (polar day, or a transition day that begins in daylight).
    AlwaysUp,
    /// No crossing inside the search window and the Sun was down at its start
    /// (polar night, or a transition day that begins in darkness).
    AlwaysDown,
}

impl RiseSetOutcome {
    /// The crossing instant, if one was found.
    pub fn instant(&self) -> Option<ModifiedJulianDate> {
        match self {
            RiseSetOutcome::Rose(t) | RiseSetOutcome::Set(t) => Some(*t),
            RiseSetOutcome::AlwaysUp | RiseSetOutcome::AlwaysDown => None,
        }
    }
}

/// Rise/set solver failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolverError {
    /// The bisection did not reach tolerance within the iteration budget.
    #[error(
        "rise/set solver did not converge after {iterations} iterations \
         at lon={lon_deg}°, lat={lat_deg}°, mjd={at_mjd}"
    )]
    NonConvergence {
        lon_deg: f64,
        lat_deg: f64,
        at_mjd: f64,
        iterations: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CrossingDirection {
    Upward,
    Downward,
}

/// Find the next sunrise at `coord` strictly after `after`, within the
/// configured search window.
pub fn next_sunrise(
    coord: &GeoCoordinate,
    after: ModifiedJulianDate,
    config: &SolverConfig,
) -> Result<RiseSetOutcome, SolverError> {
    Ok(
        match find_crossing(coord, after, config, CrossingDirection::Upward)? {
            Some(t) => RiseSetOutcome::Rose(t),
            None => classify_no_crossing(coord, after, config),
        },
    )
}

/// Find the next sunset at `coord` strictly after `after`, within the
/// configured search window.
pub fn next_sunset(
    coord: &GeoCoordinate,
    after: ModifiedJulianDate,
    config: &SolverConfig,
) -> Result<RiseSetOutcome, SolverError> {
    Ok(
        match find_crossing(coord, after, config, CrossingDirection::Downward)? {
            Some(t) => RiseSetOutcome::Set(t),
            None => classify_no_crossing(coord, after, config),
        },
    )
}

/// Altitude relative to the configured horizon crossing angle, in degrees.
fn relative_altitude(coord: &GeoCoordinate, t: ModifiedJulianDate, config: &SolverConfig) -> f64 {
    sun_altitude(coord, t).value() - config.horizon_deg.value()
}

/// When no crossing exists in the window, the state at the window start
/// decides the outcome. Covers polar day, polar night, and the degenerate
/// start-up-then-set transition day with a single rule.
fn classify_no_crossing(
    coord: &GeoCoordinate,
    after: ModifiedJulianDate,
    config: &SolverConfig,
) -> RiseSetOutcome {
    if relative_altitude(coord, after, config) > 0.0 {
        RiseSetOutcome::AlwaysUp
    } else {
        RiseSetOutcome::AlwaysDown
    }
}

/// Scan forward for a sign change in the requested direction, then bisect.
fn find_crossing(
    coord: &GeoCoordinate,
    after: ModifiedJulianDate,
    config: &SolverConfig,
    direction: CrossingDirection,
) -> Result<Option<ModifiedJulianDate>, SolverError> {
    let mut prev_t = after.value();
    let mut prev_alt = relative_altitude(coord, after, config);

    let mut offset = config.scan_step_days;
    while offset <= config.search_window_days + 1e-12 {
        let t = after.value() + offset;
        let alt = relative_altitude(coord, ModifiedJulianDate::new(t), config);

        let crossed = match direction {
            CrossingDirection::Upward => prev_alt < 0.0 && alt >= 0.0,
            CrossingDirection::Downward => prev_alt > 0.0 && alt <= 0.0,
        };
        if crossed {
            return bisect(coord, prev_t, t, direction, config).map(Some);
        }

        prev_t = t;
        prev_alt = alt;
        offset += config.scan_step_days;
    }

    Ok(None)
}

/// Bisect a bracketed crossing down to tolerance.
fn bisect(
    coord: &GeoCoordinate,
    mut lo: f64,
    mut hi: f64,
    direction: CrossingDirection,
    config: &SolverConfig,
) -> Result<ModifiedJulianDate, SolverError> {
    for _ in 0..config.max_iterations {
        if hi - lo <= config.tolerance_days {
            return Ok(ModifiedJulianDate::new(0.5 * (lo + hi)));
        }

        let mid = 0.5 * (lo + hi);
        let alt = relative_altitude(coord, ModifiedJulianDate::new(mid), config);
        let past_crossing = match direction {
            CrossingDirection::Upward => alt >= 0.0,
            CrossingDirection::Downward => alt <= 0.0,
        };
        if past_crossing {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Err(SolverError::NonConvergence {
        lon_deg: coord.lon_deg.value(),
        lat_deg: coord.lat_deg.value(),
        at_mjd: lo,
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::{next_sunrise, next_sunset, RiseSetOutcome, SolverError};
    use crate::config::SolverConfig;
    use crate::models::{GeoCoordinate, ModifiedJulianDate};

    const MJD_EQUINOX: f64 = 57467.0; // 2016-03-20
    const MJD_JUNE_SOLSTICE: f64 = 57559.0; // 2016-06-20
    const MJD_DEC_SOLSTICE: f64 = 57743.0; // 2016-12-21

    fn greenwich() -> GeoCoordinate {
        GeoCoordinate::new(-0.0005, 51.476852).unwrap()
    }

    #[test]
    fn test_sunrise_greenwich_equinox() {
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let outcome = next_sunrise(&greenwich(), day_start, &config).unwrap();
        let rise = outcome.instant().expect("equinox day has a sunrise");

        // Roughly 06:00 UTC on an equinox day at the prime meridian.
        let hours = (rise.value() - MJD_EQUINOX) * 24.0;
        assert!(
            (5.5..6.5).contains(&hours),
            "sunrise hour out of range: {hours}"
        );
    }

    #[test]
    fn test_sunset_follows_sunrise() {
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let rise = next_sunrise(&greenwich(), day_start, &config)
            .unwrap()
            .instant()
            .unwrap();
        let set = next_sunset(&greenwich(), rise, &config)
            .unwrap()
            .instant()
            .unwrap();

        assert!(rise.value() < set.value());
        let daylight_hours = (set.value() - rise.value()) * 24.0;
        assert!(
            (11.0..13.0).contains(&daylight_hours),
            "equinox daylight was {daylight_hours} hours"
        );
    }

    #[test]
    fn test_solver_is_pure() {
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let first = next_sunrise(&greenwich(), day_start, &config).unwrap();
        let second = next_sunrise(&greenwich(), day_start, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_polar_day_reports_always_up() {
        let config = SolverConfig::default();
        let pole = GeoCoordinate::new(0.0, 90.0).unwrap();
        let day_start = ModifiedJulianDate::new(MJD_JUNE_SOLSTICE);

        let outcome = next_sunrise(&pole, day_start, &config).unwrap();
        assert_eq!(outcome, RiseSetOutcome::AlwaysUp);
        assert_eq!(outcome.instant(), None);
    }

    #[test]
    fn test_polar_night_reports_always_down() {
        let config = SolverConfig::default();
        let pole = GeoCoordinate::new(0.0, 90.0).unwrap();
        let day_start = ModifiedJulianDate::new(MJD_DEC_SOLSTICE);

        let outcome = next_sunrise(&pole, day_start, &config).unwrap();
        assert_eq!(outcome, RiseSetOutcome::AlwaysDown);
    }

    #[test]
    fn test_eastern_longitude_rises_earlier() {
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);
        let east = GeoCoordinate::new(10.0, 45.0).unwrap();
        let west = GeoCoordinate::new(0.0, 45.0).unwrap();

        let rise_east = next_sunrise(&east, day_start, &config)
            .unwrap()
            .instant()
            .unwrap();
        let rise_west = next_sunrise(&west, day_start, &config)
            .unwrap()
            .instant()
            .unwrap();

        assert!(rise_east.value() < rise_west.value());
    }

    #[test]
    fn test_starved_iteration_budget_is_an_error() {
        let config = SolverConfig {
            max_iterations: 1,
            tolerance_days: 1e-12,
            ..SolverConfig::default()
        };
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let err = next_sunrise(&greenwich(), day_start, &config).unwrap_err();
        let SolverError::NonConvergence {
            lat_deg,
            iterations,
            ..
        } = err;
        assert_eq!(iterations, 1);
        assert!((lat_deg - 51.476852).abs() < 1e-9);
    }
}
