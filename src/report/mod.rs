//! Reporters turn loaded result documents into charts.

pub mod aggregate;
pub mod sweep;
pub mod variability;

use crate::chart::Chart;
use crate::error::ReportError;

pub use aggregate::AggregateReporter;
pub use sweep::ExperimentSweepReporter;
pub use variability::VariabilityReporter;

/// Builds a chart of one metric from a result document.
pub trait Reporter {
    /// The documents this reporter reads.
    type Input: ?Sized;

    /// Renders `metric` for `input`. Fails without producing a partial chart.
    fn render(&self, input: &Self::Input, metric: &str) -> Result<Chart, ReportError>;
}
