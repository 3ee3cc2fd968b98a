//! Headless chart model produced by the reporters.
//!
//! A [`Chart`] carries everything needed to draw it: titles, categories and
//! the numbers behind every bar, box or line. Views in [`svg`] and [`table`]
//! turn it into output.

pub mod svg;
pub mod table;

use crate::metric::Metric;

/// Horizontal bar chart, one bar per algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub value_label: String,
    pub category_label: String,
    pub metric: Metric,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Box-and-whisker chart, one box per algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotChart {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub metric: Metric,
    pub boxes: Vec<BoxSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub label: String,
    /// 1-based position along the category axis.
    pub position: usize,
    pub stats: BoxStats,
}

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Whiskers reach the furthest values within this many IQRs of the box.
    pub const WHISKER_IQR: f64 = 1.5;

    /// Summarises `values`; `None` when there is nothing to summarise.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let reach = Self::WHISKER_IQR * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        let lower_whisker = inside.clone().fold(q1, f64::min);
        let upper_whisker = inside.fold(q3, f64::max);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }

    /// Smallest and largest value drawn, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let low = self.outliers.iter().copied().fold(self.lower_whisker, f64::min);
        let high = self.outliers.iter().copied().fold(self.upper_whisker, f64::max);
        (low, high)
    }
}

/// Linear interpolation between closest ranks over sorted data.
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Multi-series line chart over a shared category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub metric: Metric,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

/// One line; `values[i]` belongs to `categories[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Rgb,
    pub marker: MarkerShape,
    pub line_style: LineStyle,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Ten-colour qualitative palette, assigned in first-seen order.
pub const PALETTE: [Rgb; 10] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
    Rgb(227, 119, 194),
    Rgb(127, 127, 127),
    Rgb(188, 189, 34),
    Rgb(23, 190, 207),
];

/// Palette colour for the `index`-th distinct key; wraps past the palette end.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Triangle,
}

impl MarkerShape {
    /// Marker for a disorder percentage.
    pub fn for_disorder(percentage: u32) -> Self {
        match percentage {
            50 => MarkerShape::Triangle,
            _ => MarkerShape::Circle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Line style for a disorder distribution, in either naming.
    pub fn for_distribution(distribution: &str) -> Self {
        match distribution {
            "middle" | "milieu" => LineStyle::Dashed,
            "end" | "fin" => LineStyle::Dotted,
            _ => LineStyle::Solid,
        }
    }
}

/// Any chart a reporter can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    BoxPlot(BoxPlotChart),
    Line(LineChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::BoxPlot(c) => &c.title,
            Chart::Line(c) => &c.title,
        }
    }

    /// File stem for written views, e.g. `compare_comparisons`.
    pub fn file_stem(&self) -> String {
        let (kind, metric) = match self {
            Chart::Bar(c) => ("compare", c.metric),
            Chart::BoxPlot(c) => ("variability", c.metric),
            Chart::Line(c) => ("sweep", c.metric),
        };
        format!("{}_{}", kind, metric.name())
    }
}
