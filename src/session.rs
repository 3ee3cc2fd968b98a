//! User actions: launching a run and the report commands offered afterwards.

use tracing::info;

use crate::chart::Chart;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::params::{load_parameters, save_parameters, RunForm, RunParameters};
use crate::report::{AggregateReporter, ExperimentSweepReporter, Reporter, VariabilityReporter};
use crate::results::{load_averaged, load_sweep_directory, load_trials};
use crate::runner::{CompletionStatus, ExternalRunner};

/// Sorting algorithms the benchmark program can show step by step.
pub const ALGORITHMS: [&str; 14] = [
    "Introsort",
    "PigeonholeSort",
    "Quicksort",
    "TriAPeigne",
    "TriPairImpair",
    "TriParInsertion",
    "TimSort",
    "TriDeShell",
    "TriFusion",
    "TriABulles",
    "TriCocktail",
    "TriParTas",
    "SmoothSort",
    "TriParSelection",
];

/// Actions available once a run has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCommand {
    /// Ask the benchmark program to show one algorithm sorting.
    ShowSort { algorithm: String },
    /// Bar chart of averaged results.
    CompareAlgorithms { metric: String },
    /// Box plot of per-trial results.
    ShowVariability { metric: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Chart(Chart),
    Completed(CompletionStatus),
}

pub struct Session<R> {
    config: Config,
    runner: R,
}

impl<R: ExternalRunner> Session<R> {
    pub fn new(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates the form, saves the parameters and runs the benchmark.
    /// Nothing is written or launched when validation fails.
    pub fn launch(&mut self, form: &RunForm) -> Result<(RunParameters, CompletionStatus)> {
        let params = form.normalized().validate()?;
        save_parameters(&params, &self.config.parameters_file)?;

        let status = self.runner.run(&params, None)?;
        info!(code = ?status.code, "Benchmark run finished");
        Ok((params, status))
    }

    pub fn dispatch(&mut self, command: ReportCommand) -> Result<CommandOutcome> {
        match command {
            ReportCommand::ShowSort { algorithm } => {
                if !ALGORITHMS.contains(&algorithm.as_str()) {
                    return Err(Error::UnknownAlgorithm(algorithm));
                }
                let params = load_parameters(&self.config.parameters_file)?;
                let status = self.runner.run(&params, Some(&algorithm))?;
                Ok(CommandOutcome::Completed(status))
            }
            ReportCommand::CompareAlgorithms { metric } => {
                let document = load_averaged(&self.config.averaged_results)?;
                Ok(CommandOutcome::Chart(AggregateReporter.render(&document, &metric)?))
            }
            ReportCommand::ShowVariability { metric } => {
                let document = load_trials(&self.config.trial_results)?;
                Ok(CommandOutcome::Chart(VariabilityReporter.render(&document, &metric)?))
            }
        }
    }

    /// Line chart over every document in the sweep directory.
    pub fn compare_sweep(&self, metric: &str) -> Result<Chart> {
        let documents = load_sweep_directory(&self.config.sweep_dir, &self.config.sweep_marker)?;
        Ok(ExperimentSweepReporter.render(&documents, metric)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReportError, RunnerError, ValidationError};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<(Vec<String>, Option<String>)>,
    }

    impl ExternalRunner for RecordingRunner {
        fn run(&mut self, params: &RunParameters, algorithm: Option<&str>) -> std::result::Result<CompletionStatus, RunnerError> {
            self.calls.push((params.to_args(), algorithm.map(str::to_string)));
            Ok(CompletionStatus { code: Some(0) })
        }
    }

    fn config_in(dir: &Path) -> Config {
        Config {
            parameters_file: dir.join("parameters.txt"),
            averaged_results: dir.join("averaged.json"),
            trial_results: dir.join("trials.json"),
            sweep_dir: dir.join("sweep"),
            output_dir: dir.join("charts"),
            ..Config::default()
        }
    }

    fn form(size: &str, percentage: &str) -> RunForm {
        RunForm {
            generator: "DesordreIntervalleDec".to_string(),
            size: size.to_string(),
            percentage: percentage.to_string(),
            distribution: Some("Début".to_string()),
        }
    }

    #[test]
    fn launch_persists_then_runs() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());

        let (params, status) = session.launch(&form("1 000", "30")).unwrap();
        assert!(status.success());
        assert_eq!(params.array_size, 1000);
        assert_eq!(
            fs::read_to_string(dir.path().join("parameters.txt")).unwrap(),
            "DesordreIntervalleDec\n1000\n30\ndebut\n"
        );
        assert_eq!(session.runner.calls.len(), 1);
        assert_eq!(session.runner.calls[0].1, None);
    }

    #[test]
    fn invalid_form_launches_nothing() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());

        let err = session.launch(&form("1000", "101")).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::PercentageOutOfRange("101".to_string())));
        assert!(!dir.path().join("parameters.txt").exists());
        assert!(session.runner.calls.is_empty());
    }

    #[test]
    fn show_sort_uses_saved_parameters() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());
        session.launch(&form("50", "20")).unwrap();

        let outcome = session
            .dispatch(ReportCommand::ShowSort {
                algorithm: "Quicksort".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Completed(CompletionStatus { code: Some(0) }));
        assert_eq!(
            session.runner.calls[1],
            (
                vec!["DesordreIntervalleDec".to_string(), "50".to_string(), "20".to_string(), "debut".to_string()],
                Some("Quicksort".to_string())
            )
        );
    }

    #[test]
    fn show_sort_rejects_unknown_algorithm() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());
        assert_eq!(
            session.dispatch(ReportCommand::ShowSort {
                algorithm: "BogoSort".to_string()
            }),
            Err(Error::UnknownAlgorithm("BogoSort".to_string()))
        );
        assert!(session.runner.calls.is_empty());
    }

    #[test]
    fn compare_and_variability_read_configured_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("averaged.json"),
            r#"{"tailleTableau":1000,"resultats":{"Tri1":{"comparisons":50},"Tri2":{"comparisons":30}}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("trials.json"),
            r#"{"results":{"A":[{"comparisons":1},{"comparisons":3},{"comparisons":2}]}}"#,
        )
        .unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());

        let CommandOutcome::Chart(Chart::Bar(bars)) = session
            .dispatch(ReportCommand::CompareAlgorithms {
                metric: "comparisons".to_string(),
            })
            .unwrap()
        else {
            panic!("expected a bar chart");
        };
        assert_eq!(bars.bars.len(), 2);

        let CommandOutcome::Chart(Chart::BoxPlot(boxes)) = session
            .dispatch(ReportCommand::ShowVariability {
                metric: "comparisons".to_string(),
            })
            .unwrap()
        else {
            panic!("expected a box plot");
        };
        assert_eq!(boxes.boxes[0].stats.median, 2.0);
    }

    #[test]
    fn missing_results_fail_the_report_only() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(config_in(dir.path()), RecordingRunner::default());
        let err = session
            .dispatch(ReportCommand::CompareAlgorithms {
                metric: "comparisons".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Report(ReportError::NotFound { .. })));

        // the session stays usable
        assert!(session.launch(&form("10", "10")).is_ok());
    }

    #[test]
    fn sweep_over_empty_directory_is_empty_input() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sweep")).unwrap();
        let session = Session::new(config_in(dir.path()), RecordingRunner::default());
        assert_eq!(
            session.compare_sweep("comparisons"),
            Err(Error::Report(ReportError::EmptyInput))
        );
    }
}
