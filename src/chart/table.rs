use prettytable::{row, Row, Table};

use crate::chart::{Chart, LineStyle, MarkerShape};

/// Builds a text table holding the numbers behind a chart.
pub fn chart_table(chart: &Chart) -> Table {
    let mut table = Table::new();

    match chart {
        Chart::Bar(c) => {
            table.add_row(row![c.category_label, c.value_label]);
            for bar in &c.bars {
                table.add_row(row![bar.label, format_value(bar.value)]);
            }
        }
        Chart::BoxPlot(c) => {
            table.add_row(row![
                "#",
                c.category_label,
                "Low whisker",
                "Q1",
                "Median",
                "Q3",
                "High whisker",
                "Outliers"
            ]);
            for summary in &c.boxes {
                let s = &summary.stats;
                let outliers: Vec<String> = s.outliers.iter().map(|v| format_value(*v)).collect();
                table.add_row(row![
                    summary.position,
                    summary.label,
                    format_value(s.lower_whisker),
                    format_value(s.q1),
                    format_value(s.median),
                    format_value(s.q3),
                    format_value(s.upper_whisker),
                    outliers.join(", ")
                ]);
            }
        }
        Chart::Line(c) => {
            // One row per category, one column per series
            let mut header = vec![c.category_label.clone()];
            header.extend(c.series.iter().map(|s| {
                format!("{} [{}]", s.label, encoding_hint(s.marker, s.line_style))
            }));
            table.add_row(Row::from(header));

            for (i, category) in c.categories.iter().enumerate() {
                let mut cells = vec![category.clone()];
                cells.extend(c.series.iter().map(|s| format_value(s.values[i])));
                table.add_row(Row::from(cells));
            }
        }
    }

    table
}

/// Prints the chart title and its table on stdout.
pub fn print_chart(chart: &Chart) {
    println!("\n{}", chart.title());
    chart_table(chart).printstd();
}

fn encoding_hint(marker: MarkerShape, style: LineStyle) -> &'static str {
    match (marker, style) {
        (MarkerShape::Circle, LineStyle::Solid) => "o -",
        (MarkerShape::Circle, LineStyle::Dashed) => "o --",
        (MarkerShape::Circle, LineStyle::Dotted) => "o :",
        (MarkerShape::Triangle, LineStyle::Solid) => "^ -",
        (MarkerShape::Triangle, LineStyle::Dashed) => "^ --",
        (MarkerShape::Triangle, LineStyle::Dotted) => "^ :",
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Bar, BarChart, LineChart, Rgb, Series};
    use crate::metric::Metric;

    #[test]
    fn bar_table_lists_bars_in_order() {
        let chart = Chart::Bar(BarChart {
            title: "t".to_string(),
            value_label: "Comparisons".to_string(),
            category_label: "Sorting algorithms".to_string(),
            metric: Metric::Comparisons,
            bars: vec![
                Bar { label: "Tri1".to_string(), value: 50.0 },
                Bar { label: "Tri2".to_string(), value: 0.25 },
            ],
        });
        let text = chart_table(&chart).to_string();
        let tri1 = text.find("Tri1").unwrap();
        let tri2 = text.find("Tri2").unwrap();
        assert!(tri1 < tri2);
        assert!(text.contains("50"));
        assert!(text.contains("0.250000"));
    }

    #[test]
    fn line_table_has_column_per_series() {
        let chart = Chart::Line(LineChart {
            title: "t".to_string(),
            category_label: "Algorithms".to_string(),
            value_label: "Comparisons".to_string(),
            metric: Metric::Comparisons,
            categories: vec!["A".to_string(), "B".to_string()],
            series: vec![Series {
                label: "G1".to_string(),
                color: Rgb(0, 0, 0),
                marker: MarkerShape::Triangle,
                line_style: LineStyle::Dashed,
                values: vec![1.0, 0.0],
            }],
        });
        let table = chart_table(&chart);
        assert_eq!(table.len(), 3);
        assert!(table.to_string().contains("G1 [^ --]"));
    }
}
