//! SVG rendering of charts with plotters.

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::{BarChart, BoxPlotChart, Chart, LineChart, LineStyle, MarkerShape};
use crate::error::ReportError;

const TITLE_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 16;
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Draws `chart` into `<dir>/<chart stem>.svg` and returns the file path.
pub fn write_svg(chart: &Chart, dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    let path = dir.join(format!("{}.svg", chart.file_stem()));

    let drawn = match chart {
        Chart::Bar(c) => draw_bar_chart(c, &path),
        Chart::BoxPlot(c) => draw_box_plot(c, &path),
        Chart::Line(c) => draw_line_chart(c, &path),
    };
    drawn.map_err(|e| ReportError::Render(e.to_string()))?;

    info!(path = %path.display(), "Wrote chart");
    Ok(path)
}

/// Label of the category sitting at `coord`, blank between categories.
fn category_at(labels: &[String], coord: f64) -> String {
    let idx = coord.round();
    if idx < 0.0 || (coord - idx).abs() > 0.3 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn value_range(low: f64, high: f64) -> (f64, f64) {
    let low = low.min(0.0);
    if high > low {
        (low, high + (high - low) * 0.1)
    } else {
        (low, low + 1.0)
    }
}

fn draw_bar_chart(c: &BarChart, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // First bar at the top of the chart
    let slots = c.bars.len().max(1);
    let labels: Vec<String> = c.bars.iter().rev().map(|b| b.label.clone()).collect();
    let max = c.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let (x_min, x_max) = value_range(0.0, max);

    let mut chart = ChartBuilder::on(&root)
        .caption(&c.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(160)
        .build_cartesian_2d(x_min..x_max, -0.5..(slots as f64 - 0.5))?;

    let y_formatter = |y: &f64| category_at(&labels, *y);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(slots)
        .y_label_formatter(&y_formatter)
        .x_desc(c.value_label.as_str())
        .y_desc(c.category_label.as_str())
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    let n = c.bars.len();
    chart.draw_series(c.bars.iter().enumerate().map(|(i, bar)| {
        let y = (n - 1 - i) as f64;
        Rectangle::new([(0.0, y - 0.4), (bar.value, y + 0.4)], BAR_COLOR.filled())
    }))?;

    root.present()?;
    Ok(())
}

fn draw_box_plot(c: &BoxPlotChart, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1500, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = c.boxes.len().max(1);
    let labels: Vec<String> = std::iter::once(String::new())
        .chain(c.boxes.iter().map(|b| b.label.clone()))
        .collect();
    let (low, high) = c
        .boxes
        .iter()
        .map(|b| b.stats.extent())
        .fold((f64::MAX, f64::MIN), |(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
    let (y_min, y_max) = if c.boxes.is_empty() { (0.0, 1.0) } else { value_range(low, high) };

    let mut chart = ChartBuilder::on(&root)
        .caption(&c.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(90)
        .build_cartesian_2d(0.5..(slots as f64 + 0.5), y_min..y_max)?;

    let x_formatter = |x: &f64| category_at(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots + 1)
        .x_label_formatter(&x_formatter)
        .x_desc(c.category_label.as_str())
        .y_desc(c.value_label.as_str())
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    let stroke = BLACK.stroke_width(1);
    let half = 0.25;
    for summary in &c.boxes {
        let x = summary.position as f64;
        let s = &summary.stats;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - half, s.q1), (x + half, s.q3)],
            stroke,
        )))?;
        chart.draw_series([
            PathElement::new(vec![(x - half, s.median), (x + half, s.median)], RGBColor(255, 127, 14).stroke_width(2)),
            PathElement::new(vec![(x, s.q1), (x, s.lower_whisker)], stroke),
            PathElement::new(vec![(x, s.q3), (x, s.upper_whisker)], stroke),
            PathElement::new(vec![(x - half / 2.0, s.lower_whisker), (x + half / 2.0, s.lower_whisker)], stroke),
            PathElement::new(vec![(x - half / 2.0, s.upper_whisker), (x + half / 2.0, s.upper_whisker)], stroke),
        ])?;
        chart.draw_series(s.outliers.iter().map(|v| Circle::new((x, *v), 3, stroke)))?;
    }

    root.present()?;
    Ok(())
}

fn draw_line_chart(c: &LineChart, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1600, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = c.categories.len().max(1);
    let max = c
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let (y_min, y_max) = value_range(0.0, max);

    let mut chart = ChartBuilder::on(&root)
        .caption(&c.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(slots as f64 - 0.5), y_min..y_max)?;

    let x_formatter = |x: &f64| category_at(&c.categories, *x);
    chart
        .configure_mesh()
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .x_label_style(
            ("sans-serif", LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(c.category_label.as_str())
        .y_desc(c.value_label.as_str())
        .draw()?;

    for series in &c.series {
        let color = RGBColor(series.color.0, series.color.1, series.color.2);
        let style = color.stroke_width(2);
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        match series.line_style {
            LineStyle::Solid => {
                chart.draw_series(LineSeries::new(points.clone(), style))?;
            }
            LineStyle::Dashed => {
                chart.draw_series(DashedLineSeries::new(points.clone(), 10, 6, style))?;
            }
            LineStyle::Dotted => {
                chart.draw_series(DashedLineSeries::new(points.clone(), 2, 4, style))?;
            }
        }

        match series.marker {
            MarkerShape::Circle => {
                chart.draw_series(points.iter().map(|p| Circle::new(*p, 5, color.filled())))?;
            }
            MarkerShape::Triangle => {
                chart.draw_series(points.iter().map(|p| TriangleMarker::new(*p, 6, color.filled())))?;
            }
        }

        // Zero-sized element carrying the legend entry
        chart
            .draw_series(std::iter::once(Circle::new((0.0, y_min), 0, color.filled())))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
