//! Configuration types for the compliance rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::DocumentTemplate;

/// Classification thresholds, in calendar days.
///
/// There is exactly one amber threshold; every consumer reads these
/// named fields rather than carrying its own cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThresholdConfig {
    /// A document within this many days of expiry classifies amber.
    /// At or below zero days it classifies red.
    pub amber_threshold_days: i64,
    /// Default window for the "expiring soon" document filter.
    pub expiring_window_days: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            amber_threshold_days: crate::classification::DEFAULT_AMBER_THRESHOLD_DAYS,
            expiring_window_days: crate::classification::DEFAULT_EXPIRING_WINDOW_DAYS,
        }
    }
}

/// Score bands for presenting the agency's overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoreBands {
    /// Minimum score presented as green.
    pub green_min: u8,
    /// Minimum score presented as amber; below this is red.
    pub amber_min: u8,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            green_min: 80,
            amber_min: 60,
        }
    }
}

/// Thresholds configuration file structure (`thresholds.yaml`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdsFile {
    /// Classification thresholds.
    pub thresholds: ThresholdConfig,
    /// Score presentation bands.
    pub score_bands: ScoreBands,
}

/// Templates configuration file structure (`templates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Map of template id to template details.
    pub templates: HashMap<String, DocumentTemplate>,
}

/// The complete compliance rules loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the files in a
/// rules configuration directory.
#[derive(Debug, Clone)]
pub struct ComplianceRules {
    /// Classification thresholds.
    thresholds: ThresholdConfig,
    /// Score presentation bands.
    score_bands: ScoreBands,
    /// Document template catalogue keyed by template id.
    templates: HashMap<String, DocumentTemplate>,
}

impl ComplianceRules {
    /// Creates a new ComplianceRules from its component parts.
    pub fn new(
        thresholds: ThresholdConfig,
        score_bands: ScoreBands,
        templates: HashMap<String, DocumentTemplate>,
    ) -> Self {
        Self {
            thresholds,
            score_bands,
            templates,
        }
    }

    /// Returns the classification thresholds.
    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Returns the score presentation bands.
    pub fn score_bands(&self) -> &ScoreBands {
        &self.score_bands
    }

    /// Returns the document template catalogue.
    pub fn templates(&self) -> &HashMap<String, DocumentTemplate> {
        &self.templates
    }
}
