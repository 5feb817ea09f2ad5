use core::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::model::task_count::TaskCount;

/// Encoding of a task-count payload supplied inline or from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadFormat {
    #[default]
    Json,
    Yaml,
}

impl PayloadFormat {
    /// `.yaml` and `.yml` files are read as YAML; everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_yaml = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_yaml {
            PayloadFormat::Yaml
        } else {
            PayloadFormat::Json
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PayloadFormat::Json => "JSON",
            PayloadFormat::Yaml => "YAML",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TaskCount {
    pub fn parse(input: &str, format: PayloadFormat) -> Result<Self, EstimateError> {
        match format {
            PayloadFormat::Json => Self::from_json(input),
            PayloadFormat::Yaml => Self::from_yaml(input),
        }
    }

    pub fn from_json(input: &str) -> Result<Self, EstimateError> {
        serde_json::from_str(input).map_err(|source| EstimateError::Malformed {
            format: PayloadFormat::Json,
            source: Box::new(source),
        })
    }

    pub fn from_yaml(input: &str) -> Result<Self, EstimateError> {
        serde_yaml::from_str(input).map_err(|source| EstimateError::Malformed {
            format: PayloadFormat::Yaml,
            source: Box::new(source),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
