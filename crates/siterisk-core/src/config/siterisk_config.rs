//! Top-level engine settings with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Rulebook, RulebookConfig, SimulationConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Engine settings aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SITERISK_*`)
/// 3. Project config (`siterisk.toml` in project root)
/// 4. User config (`~/.siterisk/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteRiskConfig {
    pub simulation: SimulationConfig,
    pub rulebook: RulebookConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sample_size: Option<u32>,
    pub rulebook_path: Option<String>,
}

impl SiteRiskConfig {
    /// Load settings with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            sample_size = config.simulation.effective_sample_size(),
            rulebook = ?config.rulebook.path,
            "engine settings resolved"
        );
        Ok(config)
    }

    /// Load settings from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(config: &SiteRiskConfig) -> Result<(), ConfigError> {
        if config.simulation.sample_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.sample_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(path) = &config.rulebook.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "rulebook.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load the configured rulebook, or the built-in one when no path is set.
    pub fn load_rulebook(&self, root: &Path) -> Result<Rulebook, ConfigError> {
        match self.rulebook.resolved_path(root) {
            Some(path) => Rulebook::load(&path),
            None => Rulebook::builtin(),
        }
    }

    /// Returns the user config path: `~/.siterisk/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SiteRiskConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SiteRiskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// `other` overrides `base` only where `other` has a `Some` value.
    fn merge(base: &mut SiteRiskConfig, other: &SiteRiskConfig) {
        if other.simulation.sample_size.is_some() {
            base.simulation.sample_size = other.simulation.sample_size;
        }
        if other.rulebook.path.is_some() {
            base.rulebook.path = other.rulebook.path.clone();
        }
    }

    /// Pattern: `SITERISK_SAMPLE_SIZE`, `SITERISK_RULEBOOK`.
    fn apply_env_overrides(config: &mut SiteRiskConfig) {
        if let Ok(val) = std::env::var("SITERISK_SAMPLE_SIZE") {
            match val.parse::<u32>() {
                Ok(v) => config.simulation.sample_size = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparsable SITERISK_SAMPLE_SIZE"),
            }
        }
        if let Ok(val) = std::env::var("SITERISK_RULEBOOK") {
            config.rulebook.path = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut SiteRiskConfig, cli: &CliOverrides) {
        if let Some(v) = cli.sample_size {
            config.simulation.sample_size = Some(v);
        }
        if let Some(ref v) = cli.rulebook_path {
            config.rulebook.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.siterisk/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".siterisk"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
