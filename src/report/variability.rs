use crate::chart::{BoxPlotChart, BoxStats, BoxSummary, Chart};
use crate::error::ReportError;
use crate::metric::Metric;
use crate::report::Reporter;
use crate::results::TrialResultDocument;

/// Box-and-whisker chart of a metric's spread across trials, one box per algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariabilityReporter;

impl Reporter for VariabilityReporter {
    type Input = TrialResultDocument;

    fn render(&self, document: &TrialResultDocument, metric: &str) -> Result<Chart, ReportError> {
        let metric: Metric = metric.parse()?;

        let mut boxes = Vec::with_capacity(document.results.len());
        for (i, algorithm) in document.results.iter().enumerate() {
            let values = algorithm
                .trials
                .iter()
                .map(|trial| {
                    trial.get(metric).ok_or_else(|| ReportError::MissingMetric {
                        algorithm: algorithm.algorithm.clone(),
                        metric: metric.name().to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, ReportError>>()?;

            let stats = BoxStats::from_values(&values).ok_or_else(|| ReportError::EmptyTrials {
                algorithm: algorithm.algorithm.clone(),
            })?;
            boxes.push(BoxSummary {
                label: algorithm.algorithm.clone(),
                position: i + 1,
                stats,
            });
        }

        Ok(Chart::BoxPlot(BoxPlotChart {
            title: "Spread of results".to_string(),
            category_label: "Sorting algorithms".to_string(),
            value_label: metric.label().to_string(),
            metric,
            boxes,
        }))
    }
}
