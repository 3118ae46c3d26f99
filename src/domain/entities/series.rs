use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::sim_params::{
    MAX_WINDOW_HOURS, MIN_WINDOW_HOURS, ValidationError,
};

/// One hourly bucket of the occurrence feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrencePoint {
    pub timestamp: DateTime<Utc>,
    pub count: u64,
}

/// Hourly occurrence counts over a contiguous window ending at an anchor instant.
///
/// Built through [`OccurrenceSeries::anchored`], which lays the timestamp grid,
/// so a series always holds between 1 and 168 points with strictly increasing,
/// hourly-spaced timestamps and the newest point on the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceSeries {
    points: Vec<OccurrencePoint>,
}

impl OccurrenceSeries {
    /// Builds a series from hourly counts, oldest first, so that index `i`
    /// gets timestamp `anchor - (len - 1 - i)` hours and the last point
    /// lands exactly on `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WindowHours`] when `counts` is empty or
    /// longer than the maximum window.
    pub fn anchored(counts: &[u64], anchor: DateTime<Utc>) -> Result<Self, ValidationError> {
        let len = counts.len();
        if len < MIN_WINDOW_HOURS as usize || len > MAX_WINDOW_HOURS as usize {
            return Err(ValidationError::WindowHours(len as u64));
        }
        let points = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| OccurrencePoint {
                timestamp: anchor - TimeDelta::hours((len - 1 - i) as i64),
                count,
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[OccurrencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // anchored() rejects empty input, kept for API completeness
        self.points.is_empty()
    }

    /// Counts in chronological order.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.count)
    }

    /// Oldest point of the window.
    pub fn oldest(&self) -> &OccurrencePoint {
        // non-empty by construction
        &self.points[0]
    }

    /// Newest point of the window (the anchor instant).
    pub fn newest(&self) -> &OccurrencePoint {
        // non-empty by construction
        &self.points[self.points.len() - 1]
    }
}
