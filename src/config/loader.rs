//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading compliance
//! rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DocumentTemplate;

use super::types::{ComplianceRules, ScoreBands, TemplatesConfig, ThresholdConfig, ThresholdsFile};

/// Loads and provides access to the compliance rules configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query thresholds, score bands, and the document
/// template catalogue.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/compliance/
/// ├── thresholds.yaml  # Classification thresholds and score bands
/// └── templates.yaml   # Document template catalogue
/// ```
///
/// # Example
///
/// ```no_run
/// use compliance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/compliance").unwrap();
///
/// let template = loader.get_template("dbs_check").unwrap();
/// println!("Template: {}", template.name);
///
/// println!("Amber window: {} days", loader.thresholds().amber_threshold_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: ComplianceRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/compliance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compliance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/compliance")?;
    /// # Ok::<(), compliance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let thresholds_path = path.join("thresholds.yaml");
        let thresholds_file = Self::load_yaml::<ThresholdsFile>(&thresholds_path)?;

        let templates_path = path.join("templates.yaml");
        let templates_config = Self::load_yaml::<TemplatesConfig>(&templates_path)?;

        let rules = ComplianceRules::new(
            thresholds_file.thresholds,
            thresholds_file.score_bands,
            templates_config.templates,
        );

        Ok(Self { rules })
    }

    /// Creates a loader from already-constructed rules.
    ///
    /// Useful in tests and embedders that build rules programmatically
    /// instead of reading them from disk.
    pub fn from_rules(rules: ComplianceRules) -> Self {
        Self { rules }
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

    /// Returns the complete loaded rules.
    pub fn rules(&self) -> &ComplianceRules {
        &self.rules
    }

    /// Returns the classification thresholds.
    pub fn thresholds(&self) -> &ThresholdConfig {
        self.rules.thresholds()
    }

    /// Returns the score presentation bands.
    pub fn score_bands(&self) -> &ScoreBands {
        self.rules.score_bands()
    }

    /// Looks up a document template by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TemplateNotFound`] if the id is not in the
    /// catalogue.
    pub fn get_template(&self, id: &str) -> EngineResult<&DocumentTemplate> {
        self.rules
            .templates()
            .get(id)
            .ok_or_else(|| EngineError::TemplateNotFound { id: id.to_string() })
    }
}
