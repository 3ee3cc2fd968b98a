//! Where parameters, result documents and charts live, and how the
//! benchmark program is started.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::runner::CommandRunner;

const PARAMETERS_FILE: &str = "config/parameters.txt";
const AVERAGED_RESULTS: &str = "results/averaged_results.json";
const TRIAL_RESULTS: &str = "results/trial_results.json";
const SWEEP_DIR: &str = "results/sweep";
const SWEEP_MARKER: &str = "resultatsMoyensTris";
const OUTPUT_DIR: &str = "charts";
const RUNNER_PROGRAM: &str = "./sort_runner";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parameters_file: PathBuf,
    pub averaged_results: PathBuf,
    pub trial_results: PathBuf,
    pub sweep_dir: PathBuf,
    /// Substring every sweep result file name contains.
    pub sweep_marker: String,
    pub output_dir: PathBuf,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub show_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameters_file: PathBuf::from(PARAMETERS_FILE),
            averaged_results: PathBuf::from(AVERAGED_RESULTS),
            trial_results: PathBuf::from(TRIAL_RESULTS),
            sweep_dir: PathBuf::from(SWEEP_DIR),
            sweep_marker: SWEEP_MARKER.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: RUNNER_PROGRAM.to_string(),
            args: Vec::new(),
            show_args: vec!["--show".to_string()],
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn command_runner(&self) -> CommandRunner {
        CommandRunner::new(
            self.runner.program.clone(),
            self.runner.args.clone(),
            self.runner.show_args.clone(),
        )
    }
}
