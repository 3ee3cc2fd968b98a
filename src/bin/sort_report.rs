//! Front-end for the sorting benchmark: launches runs and charts their results.
//!
//! ```bash
//! # Validate the parameters, save them and run the benchmark program
//! sort_report run --generator DesordreIntervalleDec --size 1000 --percentage 30 --distribution start
//!
//! # Chart the results
//! sort_report compare --metric comparisons
//! sort_report variability --metric executionTime
//! sort_report sweep --metric assignments
//!
//! # Print the numbers only, without writing SVG files
//! RUST_LOG=debug sort_report --headless compare --metric assignments
//! ```

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use sort_benchmark_viewer::chart::svg::write_svg;
use sort_benchmark_viewer::chart::table::print_chart;
use sort_benchmark_viewer::chart::Chart;
use sort_benchmark_viewer::config::Config;
use sort_benchmark_viewer::error::Result;
use sort_benchmark_viewer::params::RunForm;
use sort_benchmark_viewer::runner::CommandRunner;
use sort_benchmark_viewer::session::{CommandOutcome, ReportCommand, Session, ALGORITHMS};

const METRICS: [&str; 3] = ["comparisons", "executionTime", "assignments"];

#[derive(Parser)]
#[command(name = "sort_report")]
#[command(version)]
#[command(about = "Configure sorting benchmark runs and chart their results")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for SVG charts
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Only print chart data, do not write SVG files
    #[arg(long, global = true)]
    headless: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate parameters, save them and run the benchmark program
    Run {
        /// Array generator, e.g. DesordreIntervalleDec
        #[arg(short, long)]
        generator: String,

        /// Array size
        #[arg(short, long)]
        size: String,

        /// Disorder percentage (0-100)
        #[arg(short, long)]
        percentage: String,

        /// Disorder distribution: start, middle or end
        #[arg(short, long)]
        distribution: Option<String>,
    },

    /// Bar chart of averaged results
    Compare {
        #[arg(short, long, value_parser = PossibleValuesParser::new(METRICS))]
        metric: String,

        /// Averaged results file (overrides the configuration)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Box plot of per-trial results
    Variability {
        #[arg(short, long, value_parser = PossibleValuesParser::new(METRICS))]
        metric: String,

        /// Per-trial results file (overrides the configuration)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Line chart over a directory of sweep results
    Sweep {
        #[arg(short, long, value_parser = PossibleValuesParser::new(METRICS))]
        metric: String,

        /// Sweep results directory (overrides the configuration)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Ask the benchmark program to show one algorithm sorting
    ShowSort {
        #[arg(short, long, value_parser = PossibleValuesParser::new(ALGORITHMS))]
        algorithm: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sort_benchmark_viewer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command {
        Commands::Run { generator, size, percentage, distribution } => {
            let form = RunForm {
                generator,
                size,
                percentage,
                distribution,
            };
            let runner = config.command_runner();
            let mut session = Session::new(config, runner);
            let (params, status) = session.launch(&form)?;

            println!("Generator: {}", params.generator);
            println!("Array size: {}", params.array_size);
            println!("Disorder percentage: {}", params.disorder_percentage);
            match params.distribution {
                Some(d) => println!("Disorder distribution: {}", d),
                None => println!("Disorder distribution: -"),
            }
            if !status.success() {
                println!("Benchmark program exited with status {:?}", status.code);
            }
            Ok(())
        }
        Commands::Compare { metric, input } => {
            if let Some(path) = input {
                config.averaged_results = path;
            }
            let headless = cli.headless;
            let mut session = new_session(config);
            let outcome = session.dispatch(ReportCommand::CompareAlgorithms { metric })?;
            show_outcome(&outcome, session.config(), headless)
        }
        Commands::Variability { metric, input } => {
            if let Some(path) = input {
                config.trial_results = path;
            }
            let headless = cli.headless;
            let mut session = new_session(config);
            let outcome = session.dispatch(ReportCommand::ShowVariability { metric })?;
            show_outcome(&outcome, session.config(), headless)
        }
        Commands::Sweep { metric, dir } => {
            if let Some(dir) = dir {
                config.sweep_dir = dir;
            }
            let session = new_session(config);
            let chart = session.compare_sweep(&metric)?;
            show_chart(&chart, session.config(), cli.headless)
        }
        Commands::ShowSort { algorithm } => {
            let mut session = new_session(config);
            let outcome = session.dispatch(ReportCommand::ShowSort { algorithm })?;
            show_outcome(&outcome, session.config(), cli.headless)
        }
    }
}

fn new_session(config: Config) -> Session<CommandRunner> {
    let runner = config.command_runner();
    Session::new(config, runner)
}

fn show_outcome(outcome: &CommandOutcome, config: &Config, headless: bool) -> Result<()> {
    match outcome {
        CommandOutcome::Chart(chart) => show_chart(chart, config, headless),
        CommandOutcome::Completed(status) => {
            if !status.success() {
                println!("Benchmark program exited with status {:?}", status.code);
            }
            Ok(())
        }
    }
}

fn show_chart(chart: &Chart, config: &Config, headless: bool) -> Result<()> {
    print_chart(chart);
    if !headless {
        let path = write_svg(chart, &config.output_dir)?;
        println!("Chart written to {}", path.display());
    }
    Ok(())
}
