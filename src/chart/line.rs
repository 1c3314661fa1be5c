//! Line charts drawn as SVG.
//!
//! Coordinates are in SVG user units. The plot is `WIDTH` wide, `height`
//! tall, with `PADDING` on every side.

use serde::Serialize;

use super::{Dataset, LegendEntry, fmt_coord, legend, scale_max};

pub const WIDTH: f64 = 600.0;
pub const PADDING: f64 = 60.0;
pub const POINT_RADIUS: f64 = 5.0;
pub const GRIDLINES: usize = 5;
/// Distance of the x-axis labels below the plot area.
pub const AXIS_LABEL_OFFSET: f64 = 20.0;
/// Distance of value annotations above their point.
pub const ANNOTATION_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub max_value: f64,
    /// Y coordinate of each horizontal gridline, top to bottom.
    pub gridlines: Vec<f64>,
    pub x_labels: Vec<AxisLabel>,
    pub series: Vec<LineSeries>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub color: String,
    pub points: Vec<LinePoint>,
    /// SVG path data: `M x y L x y ...`.
    pub path: String,
    /// Whether point values are printed. Only the first series is.
    pub annotated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl LinePoint {
    /// Baseline of the value annotation.
    pub fn annotation_y(&self) -> f64 {
        self.y - ANNOTATION_OFFSET
    }
}

pub(super) fn compute(labels: &[String], datasets: &[Dataset], height: f64) -> LineChart {
    let max_value = scale_max(datasets);
    let n = labels.len();
    let plot_height = height - PADDING * 2.0;

    let x_at = |i: usize| PADDING + i as f64 * (WIDTH - PADDING * 2.0) / (n.max(2) - 1) as f64;
    let y_at = |v: f64| height - PADDING - (v / max_value) * plot_height;

    let gridlines = (0..GRIDLINES)
        .map(|i| PADDING + i as f64 * plot_height / (GRIDLINES - 1) as f64)
        .collect();

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, text)| AxisLabel {
            text: text.clone(),
            x: x_at(i),
            y: height - PADDING + AXIS_LABEL_OFFSET,
        })
        .collect();

    let series = datasets
        .iter()
        .enumerate()
        .map(|(j, dataset)| {
            let points: Vec<LinePoint> = (0..n)
                .map(|i| {
                    let value = dataset.value_at(i);
                    LinePoint {
                        x: x_at(i),
                        y: y_at(value),
                        value,
                    }
                })
                .collect();
            LineSeries {
                label: dataset.label.clone(),
                color: dataset.display_color().to_string(),
                path: path_data(&points),
                points,
                annotated: j == 0,
            }
        })
        .collect();

    LineChart {
        width: WIDTH,
        height,
        max_value,
        gridlines,
        x_labels,
        series,
        legend: legend(datasets),
    }
}

fn path_data(points: &[LinePoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{} {} {}", cmd, fmt_coord(p.x), fmt_coord(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
