use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::entities::machine::{MachineProfile, SparePart};
use crate::domain::value_objects::SeriesMode;
use crate::domain::value_objects::sim_params::SimulationParams;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub machine: MachineConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Occurrence feed settings: mode, window and the parametric knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub mode: SeriesMode,
    #[serde(default = "default_window_hours")]
    pub window_hours: u32,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    #[serde(default = "default_burstiness")]
    pub burstiness: f64,
    #[serde(default = "default_noise")]
    pub noise: f64,
    /// Fixed seed for reproducible parametric runs; absent means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Remote assistant provider settings (openai-compatible, or noop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    /// The key itself never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

/// Text-to-speech settings for assistant replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_tts_language")]
    pub language: String,
}

/// Static machine and ticket data shown on the dashboard and the report.
/// Defaults carry the demo dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub company: String,
    pub machine_id: String,
    pub last_maintenance_date: String,
    pub last_maintenance_desc: String,
    pub defect: String,
    pub authorized: bool,
    pub ticket: String,
    pub technicians: Vec<String>,
    pub parts: Vec<SparePart>,
}

/// Terminal dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

// --- Defaults ---

const fn default_window_hours() -> u32 {
    48
}

const fn default_intensity() -> f64 {
    4.0
}

const fn default_burstiness() -> f64 {
    0.3
}

const fn default_noise() -> f64 {
    0.25
}

fn default_provider() -> String {
    "openai".into()
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}

const fn default_max_tokens() -> u32 {
    500
}

const fn default_temperature() -> f64 {
    0.1
}

fn default_tts_language() -> String {
    "pt-BR".into()
}

const fn default_tick_ms() -> u64 {
    250
}

// --- Default impls ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: SeriesMode::default(),
            window_hours: default_window_hours(),
            intensity: default_intensity(),
            burstiness: default_burstiness(),
            noise: default_noise(),
            seed: None,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            language: default_tts_language(),
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        let demo = MachineProfile::default();
        Self {
            company: demo.company,
            machine_id: demo.machine_id,
            last_maintenance_date: demo.last_maintenance_date,
            last_maintenance_desc: demo.last_maintenance_desc,
            defect: demo.defect,
            authorized: demo.authorized,
            ticket: demo.ticket,
            technicians: demo.technicians,
            parts: demo.parts,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Falha ao ler o arquivo de configuração")?;
        toml::from_str(&content).context("Falha ao interpretar o arquivo de configuração")
    }

    /// Save config to default path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Falha ao criar o diretório de configuração")?;
        let content = toml::to_string_pretty(self).context("Falha ao serializar a configuração")?;
        std::fs::write(path, content).context("Falha ao gravar o arquivo de configuração")?;
        Ok(())
    }

    /// Default config file location
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Diretório de configuração indeterminável")?;
        Ok(config_dir.join("seep").join("config.toml"))
    }
}

// No clamping on this mapping: out-of-range values must reach the generator
// unchanged so they surface as a ValidationError instead of being silently
// pulled into range.
impl From<&SimulationConfig> for SimulationParams {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            window_hours: config.window_hours,
            intensity: config.intensity,
            burstiness: config.burstiness,
            noise: config.noise,
        }
    }
}

impl From<&MachineConfig> for MachineProfile {
    fn from(config: &MachineConfig) -> Self {
        Self {
            company: config.company.clone(),
            machine_id: config.machine_id.clone(),
            last_maintenance_date: config.last_maintenance_date.clone(),
            last_maintenance_desc: config.last_maintenance_desc.clone(),
            defect: config.defect.clone(),
            authorized: config.authorized,
            ticket: config.ticket.clone(),
            technicians: config.technicians.clone(),
            parts: config.parts.clone(),
        }
    }
}
