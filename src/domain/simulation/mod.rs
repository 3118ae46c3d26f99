pub mod demo;
pub mod parametric;

use serde::Serialize;

use crate::domain::entities::series::OccurrenceSeries;
use crate::domain::entities::summary::Summary;

pub use demo::fixed;
pub use parametric::generate;

/// A completed simulation: the series plus the statistics derived from it.
///
/// The generators are the only producers, so `summary` always matches
/// `series`. Pure data from here on; no I/O, nothing persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub series: OccurrenceSeries,
    pub summary: Summary,
}

impl SimulationRun {
    #[must_use]
    pub fn from_series(series: OccurrenceSeries) -> Self {
        let summary = Summary::of(&series);
        Self { series, summary }
    }
}
