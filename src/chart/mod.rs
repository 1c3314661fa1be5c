//! # Chart Geometry
//!
//! Turns chart data (labels plus one or more numeric series) into drawable
//! geometry: bar heights, line points and SVG paths, pie and doughnut arcs.
//! Nothing here produces markup; the graph renderer in
//! [`crate::render`] consumes these types.
//!
//! ## Shape mismatches
//!
//! Series and labels are not required to have the same length. Bar groups
//! and line points follow the labels: a missing value counts as 0 and values
//! past the last label are ignored (they still count towards the scale).
//! Pie charts use every value of the first series, with a blank label where
//! none was given. Only an empty label list or an empty series list yields
//! [`ChartGeometry::NoData`].
//!
//! ## Example
//!
//! ```
//! use tessera::chart::{self, ChartGeometry, ChartKind, Dataset};
//!
//! let labels = vec!["A".to_string(), "B".to_string()];
//! let datasets = vec![Dataset::new("Sales", vec![50.0, 100.0], "#0066cc")];
//! match chart::compute(ChartKind::Bar, &labels, &datasets, None) {
//!     ChartGeometry::Bar(bar) => {
//!         assert_eq!(bar.groups[0].bars[0].height_fraction, 0.5);
//!         assert_eq!(bar.groups[1].bars[0].height_fraction, 1.0);
//!     }
//!     other => panic!("unexpected geometry: {:?}", other),
//! }
//! ```

pub mod bar;
pub mod line;
pub mod pie;

pub use bar::{Bar, BarChart, BarGroup, BAR_MIN_HEIGHT_PX};
pub use line::{AxisLabel, LineChart, LinePoint, LineSeries};
pub use pie::{PieChart, PieSlice};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{Fields, format_number, parse_leading_int, value_number, value_text};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Slice and new-dataset colors, cycled by index.
pub const PALETTE: [&str; 7] = [
    "#0066cc", "#764ba2", "#f093fb", "#4facfe", "#fa709a", "#43e97b", "#38f9d7",
];

/// Series color when a dataset has none.
pub const DEFAULT_COLOR: &str = "#0066cc";

/// Legend text when a dataset has no label.
pub const DEFAULT_SERIES_LABEL: &str = "Dataset";

/// Drawing height when the `height` field has no usable number.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Floor for the value scale, so an all-zero chart never divides by zero.
const MIN_SCALE: f64 = 1.0;

// ============================================================================
// INPUT
// ============================================================================

/// Chart flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    /// Parse a `chartType` value. Anything unrecognised draws as a bar chart.
    pub fn parse(s: &str) -> Self {
        match s {
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Bar,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }
}

/// One named numeric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default)]
    pub color: String,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data,
            color: color.into(),
        }
    }

    /// Read a dataset from component data, tolerating any shape.
    ///
    /// Non-numeric entries in `data` become 0.
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            label: fields.text("label"),
            data: fields
                .list("data")
                .iter()
                .map(|v| value_number(v).unwrap_or(0.0))
                .collect(),
            color: fields.text("color"),
        }
    }

    /// Value at `index`, or 0 when the series is shorter.
    pub fn value_at(&self, index: usize) -> f64 {
        self.data.get(index).copied().unwrap_or(0.0)
    }

    /// Color for drawing, with the default applied.
    pub fn display_color(&self) -> &str {
        if self.color.is_empty() { DEFAULT_COLOR } else { &self.color }
    }

    /// Label for legends, with the default applied.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { DEFAULT_SERIES_LABEL } else { &self.label }
    }
}

/// Everything a graph component's data says about its chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// CSS height as stored, e.g. `"400px"`.
    pub height: String,
    pub show_legend: bool,
}

impl ChartInput {
    /// Read chart settings from a graph component's data.
    pub fn from_fields(fields: Fields<'_>) -> Self {
        Self {
            kind: ChartKind::parse(&fields.text("chartType")),
            labels: fields.list("labels").iter().map(value_text).collect(),
            datasets: fields.list("datasets").iter().map(Dataset::from_value).collect(),
            height: fields.text("height"),
            show_legend: fields.flag("showLegend"),
        }
    }

    /// Pixel height for SVG charts, from the leading number of `height`.
    pub fn height_px(&self) -> f64 {
        height_px(&self.height)
    }

    pub fn geometry(&self) -> ChartGeometry {
        compute(self.kind, &self.labels, &self.datasets, Some(self.height_px()))
    }
}

/// Leading integer of a CSS height, or [`DEFAULT_HEIGHT`] when absent or zero.
pub fn height_px(height: &str) -> f64 {
    match parse_leading_int(height) {
        Some(h) if h > 0 => h as f64,
        _ => DEFAULT_HEIGHT,
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Drawable geometry for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartGeometry {
    /// No labels or no series: nothing to draw.
    NoData,
    Bar(BarChart),
    Line(LineChart),
    /// Pie and doughnut charts; [`PieChart::doughnut`] tells them apart.
    Pie(PieChart),
}

/// A legend swatch for bar and line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Compute chart geometry.
///
/// `height` is the drawing height in pixels for line charts; `None` uses
/// [`DEFAULT_HEIGHT`]. Bar charts are laid out in relative units and pie
/// charts in a fixed 400x400 box, so neither depends on it.
pub fn compute(
    kind: ChartKind,
    labels: &[String],
    datasets: &[Dataset],
    height: Option<f64>,
) -> ChartGeometry {
    if labels.is_empty() || datasets.is_empty() {
        return ChartGeometry::NoData;
    }
    match kind {
        ChartKind::Bar => ChartGeometry::Bar(bar::compute(labels, datasets)),
        ChartKind::Line => {
            let height = height.filter(|h| h.is_finite() && *h > 0.0).unwrap_or(DEFAULT_HEIGHT);
            ChartGeometry::Line(line::compute(labels, datasets, height))
        }
        ChartKind::Pie => ChartGeometry::Pie(pie::compute(labels, &datasets[0], false)),
        ChartKind::Doughnut => ChartGeometry::Pie(pie::compute(labels, &datasets[0], true)),
    }
}

/// Largest value across every series, floored at 1.
fn scale_max(datasets: &[Dataset]) -> f64 {
    datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .filter(|v| v.is_finite())
        .fold(MIN_SCALE, f64::max)
}

fn legend(datasets: &[Dataset]) -> Vec<LegendEntry> {
    datasets
        .iter()
        .map(|d| LegendEntry {
            label: d.display_label().to_string(),
            color: d.display_color().to_string(),
        })
        .collect()
}

/// Format an SVG coordinate, rounded to three decimals.
pub fn fmt_coord(v: f64) -> String {
    format_number((v * 1000.0).round() / 1000.0)
}
