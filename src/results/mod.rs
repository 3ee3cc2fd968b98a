//! Result documents written by the benchmark program.
//!
//! Documents are read fresh for every report and never modified. Algorithm
//! order always follows the order of keys in the source file.

pub mod sweep;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::ReportError;
use crate::metric::Metric;

pub use sweep::{load_sweep_directory, SweepIdentity, SweepResultDocument};

/// Named numeric measurements for one algorithm (averaged or a single trial).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRecord(BTreeMap<String, f64>);

impl MetricRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    /// Value of `metric` under any of its accepted keys.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        metric.keys().iter().find_map(|key| self.0.get(*key).copied())
    }
}

/// Averaged measurements for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub algorithm: String,
    pub metrics: MetricRecord,
}

/// Every trial recorded for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmTrials {
    pub algorithm: String,
    pub trials: Vec<MetricRecord>,
}

/// One completed run, averaged over its trials.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedResultDocument {
    pub array_size: u64,
    pub results: Vec<AlgorithmResult>,
}

impl AveragedResultDocument {
    pub fn get(&self, algorithm: &str) -> Option<&MetricRecord> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm)
            .map(|r| &r.metrics)
    }
}

/// One completed run with every trial kept.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResultDocument {
    pub array_size: Option<u64>,
    pub results: Vec<AlgorithmTrials>,
}

#[derive(Deserialize)]
struct RawAveraged {
    #[serde(rename = "arraySize", alias = "tailleTableau")]
    array_size: u64,
    #[serde(rename = "results", alias = "resultats")]
    results: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawTrials {
    #[serde(default, rename = "arraySize", alias = "tailleTableau")]
    array_size: Option<u64>,
    #[serde(rename = "results", alias = "resultats")]
    results: Map<String, Value>,
}

/// Loads the averaged results of a single run.
pub fn load_averaged(path: &Path) -> Result<AveragedResultDocument, ReportError> {
    let content = read_document(path)?;
    let document = parse_averaged(path, &content)?;
    info!(
        path = %path.display(),
        algorithms = document.results.len(),
        "Loaded averaged results"
    );
    Ok(document)
}

/// Loads the per-trial results of a single run.
pub fn load_trials(path: &Path) -> Result<TrialResultDocument, ReportError> {
    let content = read_document(path)?;
    let raw: RawTrials =
        serde_json::from_str(&content).map_err(|e| ReportError::malformed(path, e))?;

    let mut results = Vec::with_capacity(raw.results.len());
    for (algorithm, value) in raw.results {
        let trials: Vec<BTreeMap<String, f64>> = serde_json::from_value(value)
            .map_err(|e| ReportError::malformed(path, format!("algorithm '{}': {}", algorithm, e)))?;
        results.push(AlgorithmTrials {
            algorithm,
            trials: trials.into_iter().map(MetricRecord).collect(),
        });
    }

    info!(path = %path.display(), algorithms = results.len(), "Loaded trial results");
    Ok(TrialResultDocument {
        array_size: raw.array_size,
        results,
    })
}

/// Reads a whole document, distinguishing a missing file from other I/O failures.
pub(crate) fn read_document(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::io(path, e),
    })
}

pub(crate) fn parse_averaged(path: &Path, content: &str) -> Result<AveragedResultDocument, ReportError> {
    let raw: RawAveraged =
        serde_json::from_str(content).map_err(|e| ReportError::malformed(path, e))?;

    let mut results = Vec::with_capacity(raw.results.len());
    for (algorithm, value) in raw.results {
        let metrics: BTreeMap<String, f64> = serde_json::from_value(value)
            .map_err(|e| ReportError::malformed(path, format!("algorithm '{}': {}", algorithm, e)))?;
        results.push(AlgorithmResult {
            algorithm,
            metrics: MetricRecord(metrics),
        });
    }

    Ok(AveragedResultDocument {
        array_size: raw.array_size,
        results,
    })
}
