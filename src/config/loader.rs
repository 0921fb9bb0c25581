//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rule-regime
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RegimeConfig, RegimeMetadata, SettlementRules};

/// Loads and provides access to the rule-regime configuration.
///
/// The `ConfigLoader` reads a `rules.yaml` file from a regime directory and
/// provides access to the regime metadata and the settlement rules.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// └── rules.yaml   # Regime metadata and rule constants
/// ```
///
/// # Example
///
/// ```no_run
/// use rescisao_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Regime: {}", loader.regime().name);
/// println!("Notice cap: {} days", loader.rules().notice_days_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegimeConfig,
}

impl ConfigLoader {
    /// Loads the regime configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the regime directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// `rules.yaml` file is missing, contains invalid YAML, or is missing a
    /// required field.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rescisao_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), rescisao_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join("rules.yaml");
        let config = Self::load_yaml::<RegimeConfig>(&rules_path)?;
        Ok(Self { config })
    }

    /// Builds a loader from the built-in CLT defaults, without touching the
    /// filesystem.
    pub fn clt_defaults() -> Self {
        Self {
            config: RegimeConfig {
                regime: RegimeMetadata {
                    code: "clt".to_string(),
                    name: "Consolidação das Leis do Trabalho".to_string(),
                    version: "2017".to_string(),
                    source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                        .to_string(),
                },
                rules: SettlementRules::default(),
            },
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.config.regime
    }

    /// Returns the settlement rules.
    pub fn rules(&self) -> &SettlementRules {
        &self.config.rules
    }
}
