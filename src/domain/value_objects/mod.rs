pub mod series_mode;
pub mod sim_params;

pub use series_mode::SeriesMode;
pub use sim_params::{SimulationParams, ValidationError};
