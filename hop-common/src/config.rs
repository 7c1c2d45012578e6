//! Bootstrap configuration and data-folder resolution

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable naming the data folder
pub const DATA_FOLDER_ENV: &str = "HOP_DATA_FOLDER";

/// Config file consulted when none is given on the command line
const DEFAULT_CONFIG_PATH: &str = "hop.toml";

/// Standard file names inside the data folder
pub const OBJECTIVES_FILE: &str = "objectives.json";
pub const INTERFERENCE_RESULTS_FILE: &str = "interference_results.jsonl";
pub const PHYSIOLOGY_RESULTS_FILE: &str = "physiological_results.jsonl";

/// Bootstrap configuration loaded from a TOML file.
///
/// These settings cannot change while the server runs; restart to pick up
/// edits.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Folder holding objectives.json and the result datasets (optional)
    #[serde(default)]
    pub data_folder: Option<PathBuf>,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            data_folder: None,
            port: default_port(),
            host: default_host(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load bootstrap configuration.
    ///
    /// An explicitly requested file must exist and parse. The default path
    /// (`hop.toml` in the working directory) degrades to compiled defaults
    /// when absent; startup must not depend on a config file being present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::parse_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
    }
}

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. HOP_DATA_FOLDER environment variable
/// 3. TOML config file
/// 4. Compiled default (`data` in the working directory)
pub fn resolve_data_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATA_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.data_folder {
        return path.clone();
    }

    PathBuf::from("data")
}

/// Resolved locations of the three input data files
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub objectives: PathBuf,
    pub interference: PathBuf,
    pub physiology: PathBuf,
}

impl DataPaths {
    pub fn new(folder: &Path) -> Self {
        Self {
            objectives: folder.join(OBJECTIVES_FILE),
            interference: folder.join(INTERFERENCE_RESULTS_FILE),
            physiology: folder.join(PHYSIOLOGY_RESULTS_FILE),
        }
    }
}
