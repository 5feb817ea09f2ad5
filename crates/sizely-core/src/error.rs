use thiserror::Error;

use crate::model::payload::PayloadFormat;

/// Failures detected before any calculation runs.
///
/// An enumeration that finds nothing is not an error; callers check
/// [`CombinationResult::is_empty`](crate::model::combination::CombinationResult::is_empty).
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("parsing {format}: {source}")]
    Malformed {
        format: PayloadFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("{field}: {message}")]
    InvalidArgument { field: String, message: String },
}

impl EstimateError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        EstimateError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, EstimateError::Malformed { .. })
    }
}
