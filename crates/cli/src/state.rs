use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

pub const APP_NAME: &str = "passkeep";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the backend lives when neither `--remote` nor a config say.
pub const DEFAULT_REMOTE: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the password-manager backend
    #[serde(default = "default_remote")]
    pub remote: Url,
}

fn default_remote() -> Url {
    Url::parse(DEFAULT_REMOTE).expect("hardcoded URL must parse")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the passkeep directory (~/.passkeep)
    pub passkeep_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the passkeep directory path (custom or default ~/.passkeep)
    pub fn passkeep_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Check if the passkeep directory exists
    #[allow(dead_code)]
    pub fn exists(custom_path: Option<PathBuf>) -> Result<bool, StateError> {
        let passkeep_dir = Self::passkeep_dir(custom_path)?;
        Ok(passkeep_dir.exists())
    }

    /// Initialize a new passkeep state directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let passkeep_dir = Self::passkeep_dir(custom_path)?;

        if passkeep_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&passkeep_dir)?;

        let config = config.unwrap_or_default();
        let config_path = passkeep_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            passkeep_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the passkeep directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let passkeep_dir = Self::passkeep_dir(custom_path)?;

        if !passkeep_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = passkeep_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            passkeep_dir,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("passkeep directory not initialized. Run 'passkeep init' first")]
    NotInitialized,

    #[error("passkeep directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
