//! Plain-text parameters file shared with the benchmark program.
//!
//! One value per line, in the order generator, array size, disorder
//! percentage, disorder distribution. The file is overwritten on every run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::params::{RunForm, RunParameters};

/// Writes the parameters, replacing any previous file.
pub fn save_parameters(params: &RunParameters, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }

    let mut content = String::new();
    for value in params.to_args() {
        content.push_str(&value);
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| ReportError::io(path, e))?;

    info!(path = %path.display(), generator = %params.generator, "Saved run parameters");
    Ok(())
}

/// Reads back a parameters file and checks it again.
pub fn load_parameters(path: &Path) -> Result<RunParameters> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::io(path, e),
    })?;

    let mut lines = content.lines().map(str::to_string);
    let form = RunForm {
        generator: lines.next().unwrap_or_default(),
        size: lines.next().unwrap_or_default(),
        percentage: lines.next().unwrap_or_default(),
        distribution: lines.next().filter(|d| !d.is_empty()),
    };
    debug!(?form, "Read parameters file");

    Ok(form.validate()?)
}
