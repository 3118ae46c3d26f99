use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::series::OccurrenceSeries;

/// Aggregate statistics derived from one occurrence series.
///
/// Always recomputed from its source series, never stored on its own.
/// `mean` keeps full floating-point precision; rounding to two decimals
/// happens in the presentation layer only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub max: u64,
    pub peak_time: DateTime<Utc>,
    pub total: u64,
}

impl Summary {
    /// Derives mean, max, peak time and total from `series`.
    ///
    /// Ties on the maximum count resolve to the earliest point.
    pub fn of(series: &OccurrenceSeries) -> Self {
        // series are non-empty by construction
        let first = &series.points()[0];
        let mut max = first.count;
        let mut peak_time = first.timestamp;
        let mut total: u64 = 0;
        for point in series.points() {
            total += point.count;
            if point.count > max {
                max = point.count;
                peak_time = point.timestamp;
            }
        }
        Self {
            mean: total as f64 / series.len() as f64,
            max,
            peak_time,
            total,
        }
    }
}
