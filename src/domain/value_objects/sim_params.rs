use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest allowed simulation window
pub const MIN_WINDOW_HOURS: u32 = 1;
/// Longest allowed simulation window (one week of hourly buckets)
pub const MAX_WINDOW_HOURS: u32 = 168;
/// Window used by the fixed demo series
pub const DEMO_WINDOW_HOURS: u32 = 48;

/// A simulation parameter fell outside its allowed range.
///
/// Raised before any generation work happens; the generator never clamps a
/// caller-supplied value silently.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error(
        "window_hours must be between {MIN_WINDOW_HOURS} and {MAX_WINDOW_HOURS} hours, got {0}"
    )]
    WindowHours(u64),
    #[error("intensity must be a positive finite rate of occurrences per hour, got {0}")]
    Intensity(f64),
    #[error("burstiness must be between 0.0 and 1.0, got {0}")]
    Burstiness(f64),
    #[error("noise must be between 0.0 and 1.0, got {0}")]
    Noise(f64),
}

/// Inputs of the parametric generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of hourly buckets to generate, in [1, 168]
    pub window_hours: u32,
    /// Mean occurrences per hour of the base rate, strictly positive
    pub intensity: f64,
    /// How many and how tall the injected peaks are, in [0, 1]
    pub burstiness: f64,
    /// Relative standard deviation of the base rate, in [0, 1]
    pub noise: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            window_hours: DEMO_WINDOW_HOURS,
            intensity: 4.0,
            burstiness: 0.3,
            noise: 0.25,
        }
    }
}

impl SimulationParams {
    /// Checks every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, naming the offending
    /// parameter and its valid range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_window(self.window_hours)?;
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(ValidationError::Intensity(self.intensity));
        }
        // NaN fails the range check and is rejected along with out-of-range values
        if !(0.0..=1.0).contains(&self.burstiness) {
            return Err(ValidationError::Burstiness(self.burstiness));
        }
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(ValidationError::Noise(self.noise));
        }
        Ok(())
    }
}

/// Checks a window length against [MIN_WINDOW_HOURS, MAX_WINDOW_HOURS].
///
/// # Errors
///
/// Returns [`ValidationError::WindowHours`] when out of range.
pub fn validate_window(window_hours: u32) -> Result<(), ValidationError> {
    if !(MIN_WINDOW_HOURS..=MAX_WINDOW_HOURS).contains(&window_hours) {
        return Err(ValidationError::WindowHours(u64::from(window_hours)));
    }
    Ok(())
}
