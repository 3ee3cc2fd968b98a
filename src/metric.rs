//! The closed set of measurements recorded for every sorting algorithm.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// A measurement recorded by the external benchmark for each algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ExecutionTime,
    Comparisons,
    Assignments,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::ExecutionTime, Metric::Comparisons, Metric::Assignments];

    /// Canonical name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::ExecutionTime => "executionTime",
            Metric::Comparisons => "comparisons",
            Metric::Assignments => "assignments",
        }
    }

    /// Axis and title label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::ExecutionTime => "Execution Time",
            Metric::Comparisons => "Comparisons",
            Metric::Assignments => "Assignments",
        }
    }

    /// Keys under which the metric may appear in a result record.
    /// The benchmark program writes the second form.
    pub fn keys(&self) -> [&'static str; 2] {
        match self {
            Metric::ExecutionTime => ["executionTime", "tempsExecution"],
            Metric::Comparisons => ["comparisons", "comparaisons"],
            Metric::Assignments => ["assignments", "assignations"],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.keys().iter().any(|key| *key == s))
            .ok_or_else(|| ReportError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_runner_names() {
        assert_eq!("comparisons".parse::<Metric>().unwrap(), Metric::Comparisons);
        assert_eq!("tempsExecution".parse::<Metric>().unwrap(), Metric::ExecutionTime);
        assert_eq!("assignations".parse::<Metric>().unwrap(), Metric::Assignments);
    }

    #[test]
    fn rejects_unknown_metric() {
        assert_eq!(
            "swaps".parse::<Metric>(),
            Err(ReportError::UnknownMetric("swaps".to_string()))
        );
        // names are case-sensitive
        assert!("Comparisons".parse::<Metric>().is_err());
    }
}
