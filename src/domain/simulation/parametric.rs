use chrono::{DateTime, Utc};
use rand::Rng;
use rand_distr::{Distribution, Poisson, StandardNormal};

use crate::domain::entities::series::OccurrenceSeries;
use crate::domain::value_objects::sim_params::{SimulationParams, ValidationError};

use super::SimulationRun;

/// Generates a stochastic occurrence series from explicit parameters and an
/// explicit random source.
///
/// Per hour: a normal base rate (mean `intensity`, relative deviation
/// `noise`), plus exponentially decaying peak contributions controlled by
/// `burstiness`, clamped to zero, then drawn through a Poisson distribution.
/// The caller owns the `rng`; concurrent runs never share generator state.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending parameter before any
/// random draw happens.
pub fn generate<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<SimulationRun, ValidationError> {
    params.validate()?;

    let window = params.window_hours as usize;
    let sigma = params.intensity * params.noise;
    let mut rates: Vec<f64> = (0..window)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            params.intensity + sigma * z
        })
        .collect();

    inject_peaks(&mut rates, params, rng);

    for rate in &mut rates {
        if *rate < 0.0 {
            *rate = 0.0;
        }
    }

    let counts: Vec<u64> = rates.iter().map(|&rate| draw_poisson(rate, rng)).collect();
    let series = OccurrenceSeries::anchored(&counts, now)?;
    Ok(SimulationRun::from_series(series))
}

/// Number of peaks to inject. Zero burstiness means a clean base rate;
/// any positive burstiness injects at least one peak.
fn peak_count(burstiness: f64) -> usize {
    if burstiness == 0.0 {
        0
    } else {
        ((burstiness * 5.0).round() as usize).max(1)
    }
}

/// Half-width of the symmetric window a peak spreads over, in hours.
fn peak_half_width(burstiness: f64) -> i64 {
    ((3.0 * (1.0 + 4.0 * burstiness)).round() as i64).max(1)
}

/// Adds peak contributions into `rates` in place. Each peak picks a uniform
/// center hour and height, then decays as exp(-|offset| / 2) around the
/// center; offsets falling outside the window are discarded.
fn inject_peaks<R: Rng + ?Sized>(rates: &mut [f64], params: &SimulationParams, rng: &mut R) {
    let peaks = peak_count(params.burstiness);
    if peaks == 0 {
        return;
    }
    let half_width = peak_half_width(params.burstiness);
    let len = rates.len() as i64;
    for _ in 0..peaks {
        let center = rng.gen_range(0..len);
        let height =
            params.intensity * (5.0 + 10.0 * params.burstiness) * rng.gen_range(0.0..1.0);
        for offset in -half_width..=half_width {
            let index = center + offset;
            if (0..len).contains(&index) {
                rates[index as usize] += height * (-(offset.abs() as f64) / 2.0).exp();
            }
        }
    }
}

/// Draws one count from a Poisson distribution with the given rate.
/// A rate of zero (or below, defensively) yields zero occurrences.
fn draw_poisson<R: Rng + ?Sized>(rate: f64, rng: &mut R) -> u64 {
    if rate <= 0.0 {
        return 0;
    }
    // Poisson::new only fails for non-positive or non-finite rates, which
    // validated parameters cannot produce
    Poisson::new(rate).map_or(0, |dist| dist.sample(rng) as u64)
}
