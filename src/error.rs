//! Error types shared by the validation, reporting and launching layers.

use std::path::PathBuf;
use thiserror::Error;

use crate::params::Generator;

/// Reasons a run form is rejected before anything is launched.
///
/// The display strings are the notices shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in every field before continuing.")]
    EmptyFields,

    #[error("The array size and the disorder percentage must be integers.")]
    NotIntegers,

    #[error("The disorder percentage must be between 0 and 100 inclusive (got {0}).")]
    PercentageOutOfRange(String),

    #[error("Unknown generator '{0}'.")]
    UnknownGenerator(String),

    #[error("Unknown disorder distribution '{0}', expected start, middle or end.")]
    UnknownDistribution(String),

    #[error("Generator {0} needs a disorder distribution.")]
    MissingDistribution(Generator),
}

/// Errors raised while loading result documents or building a chart from them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The result file does not exist.
    #[error("Result file '{path}' does not exist")]
    NotFound { path: PathBuf },

    /// The file exists but is not a usable result document.
    #[error("Malformed result data in '{path}': {reason}")]
    MalformedData { path: PathBuf, reason: String },

    /// A metric outside the closed metric set was requested.
    #[error("Unknown metric '{0}', expected one of comparisons, executionTime, assignments")]
    UnknownMetric(String),

    /// A record exists for the algorithm but lacks the requested metric.
    #[error("Algorithm '{algorithm}' has no value for metric '{metric}'")]
    MissingMetric { algorithm: String, metric: String },

    /// An algorithm has no trials, so no quartiles can be computed.
    #[error("Algorithm '{algorithm}' has no trials")]
    EmptyTrials { algorithm: String },

    /// A sweep report was requested over zero documents.
    #[error("No sweep documents to compare")]
    EmptyInput,

    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// The chart could not be drawn to its output.
    #[error("Failed to render chart: {0}")]
    Render(String),
}

impl ReportError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ReportError::MalformedData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Failure to start the external benchmark program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    #[error("Failed to execute '{program}': {message}")]
    Spawn { program: String, message: String },
}

/// Top-level error for a user-triggered action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },

    #[error("Unknown sorting algorithm '{0}'")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_into_top_level() {
        let err: Error = ValidationError::EmptyFields.into();
        assert_eq!(err.to_string(), "Please fill in every field before continuing.");
    }

    #[test]
    fn malformed_keeps_path_and_reason() {
        let err = ReportError::malformed("a.json", "missing field `results`");
        assert_eq!(
            err.to_string(),
            "Malformed result data in 'a.json': missing field `results`"
        );
    }
}
