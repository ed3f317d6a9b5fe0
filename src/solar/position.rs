//! Low-precision solar position model.
//!
//! Computes the topocentric altitude of the Sun's center from the standard
//! low-accuracy series: geocentric ecliptic longitude from the mean longitude
//! and mean anomaly in days since J2000, declination and right ascension via
//! the obliquity, apparent sidereal time at Greenwich, and the local hour
//! angle transform. Accuracy at the horizon crossing is on the order of a
//! minute or two, well inside the spread the survey measures. Atmospheric
//! refraction is not applied here; the rise/set solver folds refraction and
//! the solar semidiameter into its horizon crossing angle.

use qtty::Degrees;

use crate::models::{GeoCoordinate, ModifiedJulianDate};

/// MJD of the J2000.0 epoch (2000-01-01 12:00 TT).
const MJD_J2000: f64 = 51544.5;

/// Wrap an angle in degrees to [0, 360).
fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Geocentric solar (declination, right ascension), both in degrees.
fn sun_equatorial(t: ModifiedJulianDate) -> (f64, f64) {
    let d = t.value() - MJD_J2000;

    let mean_longitude = normalize_degrees(280.460 + 0.9856474 * d);
    let mean_anomaly = (357.528 + 0.9856003 * d).to_radians();

    // Equation of center, first two terms.
    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();

    let obliquity = (23.439 - 0.000_000_4 * d).to_radians();

    let declination = (obliquity.sin() * ecliptic_longitude.sin()).asin().to_degrees();
    let right_ascension = (ecliptic_longitude.sin() * obliquity.cos())
        .atan2(ecliptic_longitude.cos())
        .to_degrees();

    (declination, normalize_degrees(right_ascension))
}

/// Apparent sidereal time at Greenwich, in degrees.
fn greenwich_sidereal_deg(t: ModifiedJulianDate) -> f64 {
    // 280.46061837 + 360.98564736629 (JD − 2451545); JD − 2451545 = MJD − 51544.5.
    let d = t.value() - MJD_J2000;
    normalize_degrees(280.46061837 + 360.98564736629 * d)
}

/// Altitude of the Sun's center above the geometric horizon for an observer
/// at `coord`, at instant `t`.
pub fn sun_altitude(coord: &GeoCoordinate, t: ModifiedJulianDate) -> Degrees {
    let (declination, right_ascension) = sun_equatorial(t);
    let hour_angle =
        (greenwich_sidereal_deg(t) + coord.lon_deg.value() - right_ascension).to_radians();

    let phi = coord.lat_deg.value().to_radians();
    let delta = declination.to_radians();

    let altitude = (phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour_angle.cos()).asin();
    Degrees::new(altitude.to_degrees())
}
