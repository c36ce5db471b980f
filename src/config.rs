//! Application configuration.
//!
//! Loaded from JSON; every section and field has a default so partial
//! documents are accepted.

use crate::core::Result;
use crate::monitoring::LoggingConfig;
use crate::scoring::ScoringRules;
use crate::sla::SlaPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SLA windows
    pub sla: SlaPolicy,
    /// Point awards
    pub scoring: ScoringRules,
    /// Logging
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check values for consistency.
    pub fn validate(&self) -> Result<()> {
        self.sla.validate()
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
