//! Launching the external benchmark program.
//!
//! The program receives the run parameters as positional arguments and
//! writes the result documents itself. Its exit status is logged but never
//! interpreted.

use std::process::Command;

use tracing::{info, warn};

use crate::error::RunnerError;
use crate::params::RunParameters;

/// How the external program finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CompletionStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can run a benchmark, or show one algorithm sorting when
/// `algorithm` is given. Blocks until done.
pub trait ExternalRunner {
    fn run(&mut self, params: &RunParameters, algorithm: Option<&str>) -> Result<CompletionStatus, RunnerError>;
}

/// Runs a program as a subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRunner {
    program: String,
    /// Arguments placed before the parameters for a benchmark run.
    run_args: Vec<String>,
    /// Arguments placed before the parameters when showing one algorithm.
    show_args: Vec<String>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, run_args: Vec<String>, show_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            run_args,
            show_args,
        }
    }

    /// Full argument list for one invocation.
    pub fn arguments(&self, params: &RunParameters, algorithm: Option<&str>) -> Vec<String> {
        let prefix = match algorithm {
            Some(_) => &self.show_args,
            None => &self.run_args,
        };
        let mut args = prefix.clone();
        args.extend(params.to_args());
        if let Some(algorithm) = algorithm {
            args.push(algorithm.to_string());
        }
        args
    }
}

impl ExternalRunner for CommandRunner {
    fn run(&mut self, params: &RunParameters, algorithm: Option<&str>) -> Result<CompletionStatus, RunnerError> {
        let args = self.arguments(params, algorithm);
        info!(program = %self.program, ?args, "Launching benchmark program");

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| RunnerError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        let completion = CompletionStatus { code: status.code() };
        if !completion.success() {
            warn!(program = %self.program, code = ?completion.code, "Benchmark program exited with failure");
        }
        Ok(completion)
    }
}
