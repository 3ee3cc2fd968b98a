use std::collections::HashMap;

use crate::chart::{palette_color, Chart, LineChart, LineStyle, MarkerShape, Series};
use crate::error::ReportError;
use crate::metric::Metric;
use crate::report::Reporter;
use crate::results::SweepResultDocument;

/// Line chart comparing algorithms across every condition of a sweep.
///
/// The category axis is the union of algorithm names in first-seen order.
/// Each document becomes one series: colour by generator, marker by
/// disorder percentage, line style by distribution. An algorithm a
/// document did not measure, or measured without the requested metric,
/// is plotted at 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperimentSweepReporter;

impl Reporter for ExperimentSweepReporter {
    type Input = [SweepResultDocument];

    fn render(&self, documents: &[SweepResultDocument], metric: &str) -> Result<Chart, ReportError> {
        let metric: Metric = metric.parse()?;
        if documents.is_empty() {
            return Err(ReportError::EmptyInput);
        }

        let mut categories: Vec<String> = Vec::new();
        let mut colors = HashMap::new();
        for sweep in documents {
            let next = colors.len();
            colors
                .entry(sweep.identity.generator.as_str())
                .or_insert_with(|| palette_color(next));
            for result in &sweep.document.results {
                if !categories.contains(&result.algorithm) {
                    categories.push(result.algorithm.clone());
                }
            }
        }

        let mut series = Vec::with_capacity(documents.len());
        for sweep in documents {
            let identity = &sweep.identity;
            let values: Vec<f64> = categories
                .iter()
                .map(|algorithm| {
                    sweep
                        .document
                        .get(algorithm)
                        .and_then(|record| record.get(metric))
                        .unwrap_or(0.0)
                })
                .collect();

            series.push(Series {
                label: format!(
                    "{} (disorder: {}, distribution: {})",
                    identity.generator, identity.disorder_percentage, identity.distribution
                ),
                color: colors[identity.generator.as_str()],
                marker: MarkerShape::for_disorder(identity.disorder_percentage),
                line_style: LineStyle::for_distribution(&identity.distribution),
                values,
            });
        }

        Ok(Chart::Line(LineChart {
            title: format!("Comparison of algorithms for {}", metric.name()),
            category_label: "Algorithms".to_string(),
            value_label: metric.label().to_string(),
            metric,
            categories,
            series,
        }))
    }
}
