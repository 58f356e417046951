//! Rules configuration loading and management for the compliance engine.
//!
//! This module provides functionality to load compliance rules from YAML
//! files: the classification thresholds, the dashboard score bands, and the
//! document template catalogue.
//!
//! # Example
//!
//! ```no_run
//! use compliance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/compliance").unwrap();
//! println!("Amber window: {} days", config.thresholds().amber_threshold_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ComplianceRules, ScoreBands, TemplatesConfig, ThresholdConfig, ThresholdsFile};
