use super::models::InterfaceKind;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileInterfaceConfig {
    pub default: Option<InterfaceKind>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileDashboardConfig {
    #[serde(rename = "sample-data")]
    pub sample_data: Option<bool>,
}

/// Settings as they appear in `config.toml`. Every field is optional so a
/// partial file only overrides what it names.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub interface: Option<FileInterfaceConfig>,
    pub dashboard: Option<FileDashboardConfig>,
}

/// Location of the per-user configuration file, if the platform exposes one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gradebook").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, anyhow::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the configuration file.
    ///
    /// An explicitly requested file must exist. The default per-user file is
    /// optional; when it is absent every setting falls back to its default.
    ///
    /// # Return
    ///
    /// The parsed settings together with the path they were read from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Ok((Self::from_file(&path)?, Some(path))),
            Some(path) => {
                debug!("No configuration file at {:?}; using defaults.", path);
                Ok((Self::default(), None))
            }
            None => {
                warn!("Could not determine a configuration directory; using defaults.");
                Ok((Self::default(), None))
            }
        }
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "interface.default" => {
                    let kind = value_str.parse::<InterfaceKind>().map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?;
                    self.interface.get_or_insert_with(Default::default).default = Some(kind);
                }
                "dashboard.sample-data" => {
                    let flag = value_str.parse::<bool>().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?;
                    self.dashboard
                        .get_or_insert_with(Default::default)
                        .sample_data = Some(flag);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
