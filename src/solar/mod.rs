//! Solar position and rise/set root finding.
//!
//! [`position`] holds the pure altitude model; [`rise_set`] brackets and
//! bisects horizon crossings of that model. Everything here is a pure
//! function of its arguments, which is what makes the per-coordinate
//! evaluation in the service layer safely parallelizable.

pub mod position;
pub mod rise_set;

pub use position::sun_altitude;
pub use rise_set::{next_sunrise, next_sunset, RiseSetOutcome, SolverError};
