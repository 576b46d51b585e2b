// src/config.rs
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

use crate::error::{ErrorPolicy, ReportError, Result};
use crate::report::percentage::ZeroTotalPolicy;

/// Run settings. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Column holding the case status.
    pub status_column: String,
    /// Status value that counts as certified.
    pub certified_status: String,
    /// Grouping column of the occupations report.
    pub occupation_column: String,
    /// Grouping column of the states report.
    pub state_column: String,
    /// Rows kept per report.
    pub limit: usize,
    pub on_error: ErrorPolicy,
    pub zero_total: ZeroTotalPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_column: "CASE_STATUS".into(),
            certified_status: "CERTIFIED".into(),
            occupation_column: "SOC_NAME".into(),
            state_column: "WORKSITE_STATE".into(),
            limit: 10,
            on_error: ErrorPolicy::Lenient,
            zero_total: ZeroTotalPolicy::Reject,
        }
    }
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ReportError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
