//! Directories of averaged results produced by a parameter sweep.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ReportError;
use crate::results::{parse_averaged, read_document, AveragedResultDocument};

/// The sweep conditions a document was produced under. Unique within a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SweepIdentity {
    pub generator: String,
    pub disorder_percentage: u32,
    pub distribution: String,
}

impl fmt::Display for SweepIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.generator, self.disorder_percentage, self.distribution)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepResultDocument {
    pub identity: SweepIdentity,
    pub document: AveragedResultDocument,
    pub source: PathBuf,
}

#[derive(Deserialize)]
struct RawIdentity {
    #[serde(rename = "generatorName", alias = "nomGenerateur")]
    generator: String,
    #[serde(rename = "disorderPercentage", alias = "desordre")]
    disorder_percentage: u32,
    #[serde(rename = "disorderDistribution", alias = "repartition")]
    distribution: String,
}

/// Loads every sweep document in `dir` whose file name contains `marker`
/// and ends in `.json`. Other entries are skipped.
///
/// Documents are returned in file name order. Two files describing the same
/// sweep conditions make the directory ambiguous and fail the whole load.
pub fn load_sweep_directory(dir: &Path, marker: &str) -> Result<Vec<SweepResultDocument>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ReportError::NotFound {
            path: dir.to_path_buf(),
        },
        _ => ReportError::io(dir, e),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReportError::io(dir, e))?.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if path.is_file() && name.contains(marker) && name.ends_with(".json") {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-sweep entry");
        }
    }
    paths.sort();

    let mut seen: HashMap<SweepIdentity, PathBuf> = HashMap::new();
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = read_document(&path)?;
        let raw: RawIdentity =
            serde_json::from_str(&content).map_err(|e| ReportError::malformed(&path, e))?;
        let identity = SweepIdentity {
            generator: raw.generator,
            disorder_percentage: raw.disorder_percentage,
            distribution: raw.distribution,
        };

        if let Some(first) = seen.get(&identity) {
            return Err(ReportError::malformed(
                &path,
                format!("duplicate sweep entry {} (already in '{}')", identity, first.display()),
            ));
        }
        seen.insert(identity.clone(), path.clone());

        let document = parse_averaged(&path, &content)?;
        debug!(path = %path.display(), %identity, "Loaded sweep document");
        documents.push(SweepResultDocument {
            identity,
            document,
            source: path,
        });
    }

    info!(dir = %dir.display(), documents = documents.len(), "Loaded sweep directory");
    Ok(documents)
}
