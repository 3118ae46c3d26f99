use serde::{Deserialize, Serialize};

/// How the occurrence feed is produced
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    /// Fixed hand-authored pattern, identical counts on every run
    #[default]
    Demo,
    /// Stochastic series driven by intensity, burstiness and noise
    Parametric,
}

impl std::fmt::Display for SeriesMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Demo => write!(f, "demo"),
            Self::Parametric => write!(f, "parametric"),
        }
    }
}
