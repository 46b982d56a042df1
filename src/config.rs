use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{PreprocessError, Result};

/// Name of the baseline utility preset that is always part of the defaults
pub const BASELINE_PRESET: &str = "uno";

/// Config file names probed in the working directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "uno.config.yaml",
    "uno.config.yml",
    "uno.config.json",
    "unocss.config.yaml",
    "unocss.config.yml",
    "unocss.config.json",
];

/// User configuration for the utility generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Presets providing the utility rules
    pub presets: Vec<String>,

    /// Utilities generated whenever the safelist is requested
    pub safelist: Vec<String>,

    /// Whether preflight (reset) CSS may be emitted at all
    pub preflights: bool,

    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            presets: Vec::new(),
            safelist: Vec::new(),
            preflights: true,
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme extensions
    pub extend: ThemeExtend,
}

/// Theme extensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeExtend {
    /// Custom colors
    pub colors: HashMap<String, String>,

    /// Custom font families
    #[serde(alias = "fontFamily")]
    pub font_family: HashMap<String, Vec<String>>,

    /// Custom spacing values
    pub spacing: HashMap<String, String>,
}

/// Values filled in when the user configuration leaves them out
#[derive(Debug, Clone, PartialEq)]
pub struct UserConfigDefaults {
    pub presets: Vec<String>,
}

impl Default for UserConfigDefaults {
    fn default() -> Self {
        Self {
            presets: vec![BASELINE_PRESET.to_string()],
        }
    }
}

/// Where the user configuration comes from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigSource {
    /// Discover a config file in the working directory
    #[default]
    Unset,
    /// An already-built configuration
    Inline(UserConfig),
    /// A config file, relative paths resolved against the working directory
    Path(PathBuf),
}

impl From<UserConfig> for ConfigSource {
    fn from(config: UserConfig) -> Self {
        ConfigSource::Inline(config)
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::Path(path)
    }
}

impl From<&str> for ConfigSource {
    fn from(path: &str) -> Self {
        ConfigSource::Path(PathBuf::from(path))
    }
}

/// A loaded configuration together with the files it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: UserConfig,
    pub sources: Vec<PathBuf>,
}

impl UserConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = read_config_file(path)?;
        serde_yaml::from_str(&content).map_err(|e| PreprocessError::Config {
            message: format!("Failed to parse YAML config {}: {}", path.display(), e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_config_file(path)?;
        serde_json::from_str(&content).map_err(|e| PreprocessError::Config {
            message: format!("Failed to parse JSON config {}: {}", path.display(), e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(PreprocessError::Config {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Fill in whatever the user left out from `defaults`
    pub fn with_defaults(mut self, defaults: &UserConfigDefaults) -> Self {
        if self.presets.is_empty() {
            self.presets = defaults.presets.clone();
        }
        self
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PreprocessError::Config {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })
}

/// Find the first known config file name present in `cwd`
pub fn find_config_file(cwd: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|candidate| candidate.is_file())
}

/// Load the user configuration for `source`, resolving paths against `cwd`.
///
/// An unset source with no config file on disk yields an empty configuration.
/// An explicit path that cannot be read or parsed is an error.
pub async fn load_config(cwd: &Path, source: &ConfigSource) -> Result<LoadedConfig> {
    let path = match source {
        ConfigSource::Inline(config) => {
            return Ok(LoadedConfig {
                config: config.clone(),
                sources: Vec::new(),
            });
        }
        ConfigSource::Path(path) if path.is_absolute() => path.clone(),
        ConfigSource::Path(path) => cwd.join(path),
        ConfigSource::Unset => match find_config_file(cwd) {
            Some(path) => path,
            None => {
                debug!(cwd = %cwd.display(), "no config file found, using defaults");
                return Ok(LoadedConfig {
                    config: UserConfig::default(),
                    sources: Vec::new(),
                });
            }
        },
    };

    debug!(path = %path.display(), "loading generator config");
    let config = tokio::task::spawn_blocking({
        let path = path.clone();
        move || UserConfig::from_file(&path)
    })
    .await
    .map_err(|e| PreprocessError::Config {
        message: format!("Config loader task failed: {}", e),
    })??;

    Ok(LoadedConfig {
        config,
        sources: vec![path],
    })
}
