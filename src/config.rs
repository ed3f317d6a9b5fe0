//! Survey and solver configuration.
//!
//! Every tuning constant a caller might care about is an explicit field with
//! a documented default; there are no hidden knobs. The engine itself reads
//! no files and no environment; the embedding application owns persistence
//! and can hand TOML fragments to [`SurveyConfig::from_toml_str`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tuning for the rise/set root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Horizon crossing angle in degrees. The default of −0.833° folds the
    /// standard atmospheric refraction correction and the solar semidiameter
    /// into the geometric horizon.
    pub horizon_deg: qtty::Degrees,
    /// Iteration budget for the bisection; exhausting it is a hard error.
    pub max_iterations: u32,
    /// Convergence tolerance in days. Default: one second.
    pub tolerance_days: f64,
    /// Forward search window from the query instant, in days.
    pub search_window_days: f64,
    /// Coarse bracketing step in days. Default: ten minutes.
    pub scan_step_days: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            horizon_deg: qtty::Degrees::new(-0.833),
            max_iterations: 60,
            tolerance_days: 1.0 / 86_400.0,
            search_window_days: 1.0,
            scan_step_days: 1.0 / 144.0,
        }
    }
}

/// Full survey configuration: which days to cover and how to solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// First surveyed calendar day (UTC). Defaults to the reference date of
    /// the original survey run.
    pub start_date: NaiveDate,
    /// Number of consecutive days to survey.
    pub days: usize,
    /// Root-finder tuning.
    pub solver: SolverConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2016, 10, 14).expect("valid reference date"),
            days: 10,
            solver: SolverConfig::default(),
        }
    }
}

impl SurveyConfig {
    /// Parse a TOML fragment; missing keys fall back to the defaults above.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
