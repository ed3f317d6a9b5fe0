//! Service layer: envelope aggregation, interval derivation, and timeline
//! assembly over the full territory × day grid.

pub mod envelope;

pub mod intervals;

pub mod timeline;

pub use envelope::{compute_envelope, DayEnvelope, RiseSetExtremes};
pub use intervals::encode_intervals;
pub use timeline::{assemble_timeline, display_day_range, TimelineError};

#[cfg(test)]
mod envelope_tests;
