use crate::chart::{Bar, BarChart, Chart};
use crate::error::ReportError;
use crate::metric::Metric;
use crate::report::Reporter;
use crate::results::AveragedResultDocument;

/// Horizontal bar chart of one averaged metric, one bar per algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateReporter;

impl Reporter for AggregateReporter {
    type Input = AveragedResultDocument;

    fn render(&self, document: &AveragedResultDocument, metric: &str) -> Result<Chart, ReportError> {
        let metric: Metric = metric.parse()?;

        let bars = document
            .results
            .iter()
            .map(|result| {
                let value = result.metrics.get(metric).ok_or_else(|| ReportError::MissingMetric {
                    algorithm: result.algorithm.clone(),
                    metric: metric.name().to_string(),
                })?;
                Ok(Bar {
                    label: result.algorithm.clone(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Chart::Bar(BarChart {
            title: format!(
                "{} of sorting for an array of {} elements",
                metric.label(),
                document.array_size
            ),
            value_label: metric.label().to_string(),
            category_label: "Sorting algorithms".to_string(),
            metric,
            bars,
        }))
    }
}
