use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::profile::RiskProfile;
use super::reference::ReferenceData;

/// Inputs used when the command line does not supply them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlanDefaults {
    pub age: u32,
    pub risk_profile: RiskProfile,
    pub total_investment: f64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        PlanDefaults {
            age: 30,
            risk_profile: RiskProfile::High,
            total_investment: 500_000.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub defaults: PlanDefaults,
    #[serde(default = "default_min_investment")]
    pub min_investment: f64,
    /// Overrides for the built-in tables; omitted fields keep built-in values.
    #[serde(default)]
    pub reference: Option<ReferenceData>,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_min_investment() -> f64 {
    10_000.0
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            defaults: PlanDefaults::default(),
            min_investment: default_min_investment(),
            reference: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or built-in defaults if
    /// no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "smartalloc", "smartalloc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.reference_data().validate().with_context(|| {
            format!(
                "Invalid reference data in config file: {}",
                path.as_ref().display()
            )
        })?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Tables the engines should use: config overrides if present,
    /// otherwise the built-in data.
    pub fn reference_data(&self) -> &ReferenceData {
        self.reference.as_ref().unwrap_or(ReferenceData::builtin())
    }
}
