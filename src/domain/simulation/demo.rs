use chrono::{DateTime, Utc};

use crate::domain::entities::series::OccurrenceSeries;
use crate::domain::value_objects::sim_params::{ValidationError, validate_window};

use super::SimulationRun;

/// Hand-authored 48-hour demo pattern: two day cycles with a calm night
/// floor and an evening surge peaking at 12 occurrences.
pub(super) const DEMO_PATTERN: [u64; 48] = [
    3, 3, 2, 2, 3, 4, 5, 6, 6, 8, 7, 6, 5, 6, 7, 8, 10, 12, 11, 9, 7, 6, 5, 4, 3, 3, 2, 2, 3, 4,
    4, 6, 7, 8, 7, 6, 5, 5, 6, 7, 8, 9, 7, 6, 5, 4, 3, 3,
];

/// Produces the fixed demo series: bit-identical counts on every call,
/// cycled to `window_hours`, anchored so the newest point lands on `now`.
///
/// # Errors
///
/// Returns [`ValidationError::WindowHours`] when `window_hours` is out of
/// range; no generation work happens in that case.
pub fn fixed(window_hours: u32, now: DateTime<Utc>) -> Result<SimulationRun, ValidationError> {
    validate_window(window_hours)?;
    let counts: Vec<u64> = DEMO_PATTERN
        .iter()
        .copied()
        .cycle()
        .take(window_hours as usize)
        .collect();
    let series = OccurrenceSeries::anchored(&counts, now)?;
    Ok(SimulationRun::from_series(series))
}
