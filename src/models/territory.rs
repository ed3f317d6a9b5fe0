//! Survey input models: coordinate samples and territories.
//!
//! Both types are built once by the territory-database collaborator before
//! the survey runs and are never mutated by the engine. Validation is
//! fail-fast: a malformed coordinate or an empty sample list is a
//! configuration error, not something to paper over downstream.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Errors raised while building survey input models.
#[derive(Debug, thiserror::Error)]
pub enum TerritoryError {
    /// Longitude outside [-180, 180] or latitude outside [-90, 90].
    #[error("coordinate out of range: lon={lon_deg}°, lat={lat_deg}°")]
    CoordinateOutOfRange { lon_deg: f64, lat_deg: f64 },

    /// A territory with zero samples would vacuously yield an absent envelope
    /// indistinguishable from "no daylight today", so it is rejected up front.
    #[error("territory \"{name}\" has no coordinate samples")]
    EmptyTerritory { name: String },
}

/// A single geographic sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Longitude in decimal degrees (-180 to 180, east positive)
    pub lon_deg: Degrees,
    /// Latitude in decimal degrees (-90 to 90, north positive)
    pub lat_deg: Degrees,
}

impl GeoCoordinate {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Result<Self, TerritoryError> {
        if !(-180.0..=180.0).contains(&lon_deg) || !(-90.0..=90.0).contains(&lat_deg) {
            return Err(TerritoryError::CoordinateOutOfRange { lon_deg, lat_deg });
        }
        Ok(Self {
            lon_deg: Degrees::new(lon_deg),
            lat_deg: Degrees::new(lat_deg),
        })
    }
}

/// A named territory with its ordered coordinate samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, also the sort key for the stable territory ordering
    pub name: String,
    /// Non-empty ordered sample list
    pub coordinates: Vec<GeoCoordinate>,
}

impl Territory {
    pub fn new(
        name: impl Into<String>,
        coordinates: Vec<GeoCoordinate>,
    ) -> Result<Self, TerritoryError> {
        let name = name.into();
        if coordinates.is_empty() {
            return Err(TerritoryError::EmptyTerritory { name });
        }
        Ok(Self { name, coordinates })
    }
}
