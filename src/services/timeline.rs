//! Timeline assembly over the full territory × day grid.
//!
//! Orders territories deterministically, evaluates every (territory, day)
//! pair independently in parallel, and emits the ordered record sequence the
//! rendering collaborator consumes.

use log::info;
use rayon::prelude::*;

use crate::api::{TerritoryIndex, TimelineData, TimelineRecord};
use crate::config::SurveyConfig;
use crate::models::{ModifiedJulianDate, Territory};
use crate::services::envelope::compute_envelope;
use crate::services::intervals::encode_intervals;
use crate::solar::rise_set::SolverError;

/// Timeline assembly failure.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// The rise/set solver failed for one of the territory's samples.
    #[error("solver failed for territory \"{territory}\": {source}")]
    Solver {
        territory: String,
        #[source]
        source: SolverError,
    },
}

/// Suggested inclusive display day-index range for a `days`-day survey.
///
/// The first and last surveyed day pad the solver's search window and are
/// not guaranteed to hold complete envelopes, so the conventional display
/// window is `[1, days − 2]`. Computation still covers all `days` days; only
/// the suggested range differs. Saturates for surveys too short to pad.
pub fn display_day_range(days: usize) -> (usize, usize) {
    let first = 1.min(days.saturating_sub(1));
    let last = days.saturating_sub(2).max(first);
    (first, last)
}

/// Assemble the ordered record sequence for `territories` over the
/// configured day range.
///
/// Territories are sorted by name once; the position in that sorted order is
/// the stable [`TerritoryIndex`] the renderer keys rows and colors on. Each
/// (territory, day) pair owns exactly one output slot and is evaluated in
/// parallel; the emitted order (territory index, then day index) is a
/// contract the parallelism is not allowed to perturb.
///
/// Pairs whose envelope is absent (whole territory in circumpolar day or
/// night) are skipped: no record is emitted for them.
pub fn assemble_timeline(
    territories: &[Territory],
    config: &SurveyConfig,
) -> Result<TimelineData, TimelineError> {
    let mut ordered: Vec<&Territory> = territories.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    for territory in &ordered {
        info!("Finding sunrises and sunsets for \"{}\"", territory.name);
    }

    let survey_start = ModifiedJulianDate::from_utc_date(config.start_date);

    let pairs: Vec<(usize, &Territory, usize)> = ordered
        .iter()
        .enumerate()
        .flat_map(|(territory_index, territory)| {
            (0..config.days).map(move |day_index| (territory_index, *territory, day_index))
        })
        .collect();

    let slots: Vec<Option<TimelineRecord>> = pairs
        .par_iter()
        .map(|&(territory_index, territory, day_index)| {
            let day_start = survey_start.add_days(day_index as f64);
            let envelope = compute_envelope(territory, day_index, day_start, &config.solver)
                .map_err(|source| TimelineError::Solver {
                    territory: territory.name.clone(),
                    source,
                })?;

            Ok(envelope.extremes.map(|extremes| {
                let (outer, inner) = encode_intervals(&extremes);
                TimelineRecord {
                    territory_index: TerritoryIndex::new(territory_index),
                    territory_name: territory.name.clone(),
                    day_index,
                    outer,
                    inner,
                }
            }))
        })
        .collect::<Result<_, TimelineError>>()?;

    let records: Vec<TimelineRecord> = slots.into_iter().flatten().collect();
    let (display_first_day, display_last_day) = display_day_range(config.days);

    Ok(TimelineData {
        records,
        territory_count: ordered.len(),
        display_first_day,
        display_last_day,
    })
}
