//! Benchmark run parameters and the checks a form must pass before a run is launched.

pub mod file;

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub use file::{load_parameters, save_parameters};

/// Array generators known to the benchmark program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    IntervalDecreasing,
    IntervalsDecreasing,
    IntervalShuffled,
    IntervalsShuffled,
    IntervalAlternating,
    IntervalsAlternating,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::IntervalDecreasing,
        Generator::IntervalsDecreasing,
        Generator::IntervalShuffled,
        Generator::IntervalsShuffled,
        Generator::IntervalAlternating,
        Generator::IntervalsAlternating,
    ];

    /// Name understood by the benchmark program.
    pub fn name(&self) -> &'static str {
        match self {
            Generator::IntervalDecreasing => "DesordreIntervalleDec",
            Generator::IntervalsDecreasing => "DesordreIntervallesDec",
            Generator::IntervalShuffled => "DesordreIntervalleMel",
            Generator::IntervalsShuffled => "DesordreIntervallesMel",
            Generator::IntervalAlternating => "DesordreIntervalleAlt",
            Generator::IntervalsAlternating => "DesordreIntervallesAlt",
        }
    }

    /// Multi-interval generators spread the disorder over several intervals,
    /// so they take no disorder distribution.
    pub fn is_multi_interval(&self) -> bool {
        matches!(
            self,
            Generator::IntervalsDecreasing
                | Generator::IntervalsShuffled
                | Generator::IntervalsAlternating
        )
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownGenerator(s.to_string()))
    }
}

/// Where in the array the disorder is concentrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Start,
    Middle,
    End,
}

impl Distribution {
    /// Value written to the parameters file and passed to the benchmark program.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Distribution::Start => "debut",
            Distribution::Middle => "milieu",
            Distribution::End => "fin",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distribution::Start => "start",
            Distribution::Middle => "middle",
            Distribution::End => "end",
        };
        f.write_str(name)
    }
}

impl FromStr for Distribution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase().replace('é', "e");
        match folded.as_str() {
            "start" | "debut" => Ok(Distribution::Start),
            "middle" | "milieu" => Ok(Distribution::Middle),
            "end" | "fin" => Ok(Distribution::End),
            _ => Err(ValidationError::UnknownDistribution(s.to_string())),
        }
    }
}

/// A validated set of parameters for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub generator: Generator,
    pub array_size: u64,
    pub disorder_percentage: u8,
    /// `None` for multi-interval generators.
    pub distribution: Option<Distribution>,
}

impl RunParameters {
    /// Positional arguments for the benchmark program, in the order
    /// generator, size, percentage, distribution.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.generator.name().to_string(),
            self.array_size.to_string(),
            self.disorder_percentage.to_string(),
            self.distribution
                .map(|d| d.wire_name().to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Raw form input, exactly as typed or selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunForm {
    pub generator: String,
    pub size: String,
    pub percentage: String,
    pub distribution: Option<String>,
}

impl RunForm {
    /// Drops the spaces users tend to type inside numbers ("10 000").
    pub fn normalized(&self) -> RunForm {
        RunForm {
            generator: self.generator.clone(),
            size: self.size.replace(' ', ""),
            percentage: self.percentage.replace(' ', ""),
            distribution: self.distribution.clone(),
        }
    }

    /// Checks the form and builds the run parameters.
    ///
    /// Rules are applied in order and the first failure is returned:
    /// non-empty size and percentage, digits only, percentage in `0..=100`,
    /// then the generator and distribution names.
    pub fn validate(&self) -> Result<RunParameters, ValidationError> {
        if self.size.is_empty() || self.percentage.is_empty() {
            return Err(ValidationError::EmptyFields);
        }

        if !is_digits(&self.size) || !is_digits(&self.percentage) {
            return Err(ValidationError::NotIntegers);
        }

        // Digits only, so a parse failure means the value is too large.
        let percentage = match self.percentage.parse::<u8>() {
            Ok(p) if p <= 100 => p,
            _ => return Err(ValidationError::PercentageOutOfRange(self.percentage.clone())),
        };
        let array_size = self
            .size
            .parse::<u64>()
            .map_err(|_| ValidationError::NotIntegers)?;

        let generator: Generator = self.generator.parse()?;
        let distribution = if generator.is_multi_interval() {
            None
        } else {
            match self.distribution.as_deref().map(str::trim) {
                None | Some("") => return Err(ValidationError::MissingDistribution(generator)),
                Some(name) => Some(name.parse::<Distribution>()?),
            }
        };

        Ok(RunParameters {
            generator,
            array_size,
            disorder_percentage: percentage,
            distribution,
        })
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
