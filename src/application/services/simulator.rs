use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::application::config::SimulationConfig;
use crate::domain::simulation::{self, SimulationRun};
use crate::domain::value_objects::SeriesMode;
use crate::domain::value_objects::sim_params::{SimulationParams, ValidationError};

/// Produces occurrence feeds on demand according to the configured mode.
///
/// Every request gets a freshly constructed random generator, so concurrent
/// requests never share or contend on generator state. A configured seed
/// makes parametric runs reproducible; without one the generator seeds from
/// OS entropy.
pub struct SimulatorService {
    config: SimulationConfig,
}

impl SimulatorService {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one simulation request anchored to the current instant.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a configured parameter is out of
    /// range; nothing is generated in that case.
    pub fn run(&self) -> Result<SimulationRun, ValidationError> {
        self.run_at(Utc::now())
    }

    /// Runs one simulation request anchored to `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a configured parameter is out of
    /// range.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<SimulationRun, ValidationError> {
        tracing::debug!(
            "simulação {} com janela de {}h",
            self.config.mode,
            self.config.window_hours
        );
        match self.config.mode {
            SeriesMode::Demo => simulation::fixed(self.config.window_hours, now),
            SeriesMode::Parametric => {
                let params = SimulationParams::from(&self.config);
                let mut rng = self.fresh_rng();
                simulation::generate(&params, &mut rng, now)
            }
        }
    }

    fn fresh_rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
