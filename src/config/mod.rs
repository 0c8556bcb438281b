use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{IntakeError, Result};
use crate::locale::Locale;
use crate::utils::{ensure_dir, write_atomic};

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "intake_core";

/// Persisted user preferences for the intake wizard host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            data_dir: None,
        }
    }
}

/// Loads and saves [`Config`] under the platform configuration directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| IntakeError::Config("no configuration directory available".into()))?
            .join(APP_DIR);
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)
                .map_err(|err| IntakeError::Config(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| IntakeError::Config(err.to_string()))?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
