// src/error.rs
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("input {0:?} has no header line")]
    EmptyInput(PathBuf),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("record {row} has {len} fields, no value for column {column}")]
    ShortRecord {
        row: usize,
        column: String,
        len: usize,
    },

    #[error("cannot compute percentages of a zero total")]
    ZeroTotal,

    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// What to do with a recoverable failure (missing column, short record,
/// zero total, unwritable output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and keep whatever was produced before it.
    #[default]
    Lenient,
    /// Return the failure to the caller.
    Strict,
}

/// A value accumulated up to the first failure, if any.
#[derive(Debug)]
pub struct Partial<T> {
    pub value: T,
    pub error: Option<ReportError>,
}

impl<T> Partial<T> {
    pub fn complete(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn failed(value: T, error: ReportError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    /// Lenient: log the error under `stage` and return the partial value.
    /// Strict: return the error.
    pub fn resolve(self, policy: ErrorPolicy, stage: &str) -> Result<T> {
        if self.is_complete() || policy == ErrorPolicy::Strict {
            return self.into_result();
        }
        if let Some(err) = &self.error {
            warn!(stage, error = %err, "continuing with partial result");
        }
        Ok(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lenient_keeps_partial_value() {
        let partial = Partial::failed(vec![1, 2], ReportError::MissingColumn("X".into()));
        assert!(!partial.is_complete());
        let value = partial.resolve(ErrorPolicy::Lenient, "test").unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_resolve_strict_returns_error() {
        let partial = Partial::failed(0u64, ReportError::ZeroTotal);
        let err = partial.resolve(ErrorPolicy::Strict, "test").unwrap_err();
        assert!(matches!(err, ReportError::ZeroTotal));
    }

    #[test]
    fn test_complete_passes_through_both_policies() {
        assert_eq!(Partial::complete(7).resolve(ErrorPolicy::Strict, "a").unwrap(), 7);
        assert_eq!(Partial::complete(7).resolve(ErrorPolicy::Lenient, "b").unwrap(), 7);
        assert_eq!(Partial::complete("x").into_result().unwrap(), "x");
    }
}
