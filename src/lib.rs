//! # Sunspan
//!
//! Daylight envelope survey engine.
//!
//! Given a fixed set of territories, each represented by a list of geographic
//! coordinate samples, this crate computes for a sequence of calendar days the
//! range of sunrise and sunset instants observed across those samples and
//! derives two nested daily intervals per territory:
//!
//! - the **outer** interval, during which at least one sample point is in
//!   daylight, and
//! - the **inner** interval, during which every sample point is
//!   simultaneously in daylight (which may be empty).
//!
//! The result is an ordered sequence of timeline records plus a suggested
//! display day-index range, ready for a downstream chart renderer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: output DTOs handed to the rendering collaborator
//! - [`config`]: survey and solver configuration with explicit defaults
//! - [`models`]: time and territory input models
//! - [`solar`]: pure solar altitude model and the rise/set root finder
//! - [`services`]: envelope aggregation, interval derivation, and timeline
//!   assembly
//!
//! ## Scope
//!
//! The engine performs no file or network I/O and no image processing.
//! Extracting coordinates from geometry files, persisting the territory list,
//! and rendering the final chart are external collaborators.
//!
//! ## Determinism and parallelism
//!
//! Every astronomical query is a pure function of its arguments, and the
//! per-day min/max fold is commutative and associative, so each
//! (territory, day) pair can be evaluated independently. Timeline assembly
//! exploits this with a parallel evaluation over the full grid while keeping
//! the output order a hard contract.

pub mod api;

pub mod config;
pub mod models;

pub mod services;

pub mod solar;
