//! Pie and doughnut charts drawn as SVG.
//!
//! Slices start at 12 o'clock (-90°) and run clockwise in data order.
//! Angles are in degrees; SVG's y axis points down, so increasing angles
//! sweep clockwise on screen.

use serde::Serialize;

use super::{Dataset, PALETTE, fmt_coord};

/// Side of the square drawing box.
pub const SIZE: f64 = 400.0;
pub const CENTER_X: f64 = 200.0;
pub const CENTER_Y: f64 = 200.0;
pub const RADIUS: f64 = 120.0;
/// Radius of the hole in a doughnut chart.
pub const INNER_RADIUS: f64 = 60.0;
pub const START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub doughnut: bool,
    /// Sum of all slice values, shown in a doughnut's hole.
    pub total: f64,
    pub center: (f64, f64),
    pub radius: f64,
    /// 0 for a plain pie.
    pub inner_radius: f64,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    /// Value as drawn. Negative inputs count as 0.
    pub value: f64,
    pub color: String,
    /// Share of the total, 0 to 100.
    pub percentage: f64,
    pub start_angle: f64,
    /// Angular size in degrees.
    pub sweep: f64,
    pub large_arc: bool,
    /// SVG path data for the wedge or ring segment.
    pub path: String,
}

impl PieSlice {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Legend text, e.g. `Desktop: 45 (45.0%)`.
    pub fn legend_text(&self) -> String {
        format!(
            "{}: {} ({:.1}%)",
            self.label,
            crate::data::format_number(self.value),
            self.percentage
        )
    }
}

pub(super) fn compute(labels: &[String], dataset: &Dataset, doughnut: bool) -> PieChart {
    let values: Vec<f64> = dataset
        .data
        .iter()
        .map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = values.iter().sum();
    let inner = if doughnut { INNER_RADIUS } else { 0.0 };

    let mut angle = START_ANGLE;
    let slices = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let (percentage, sweep) = if total > 0.0 {
                (value / total * 100.0, value / total * 360.0)
            } else {
                (0.0, 0.0)
            };
            let start_angle = angle;
            angle += sweep;
            PieSlice {
                label: labels.get(i).cloned().unwrap_or_default(),
                value,
                color: PALETTE[i % PALETTE.len()].to_string(),
                percentage,
                start_angle,
                sweep,
                large_arc: sweep > 180.0,
                path: slice_path(start_angle, sweep, inner),
            }
        })
        .collect();

    PieChart {
        doughnut,
        total,
        center: (CENTER_X, CENTER_Y),
        radius: RADIUS,
        inner_radius: inner,
        slices,
    }
}

fn polar(radius: f64, degrees: f64) -> (String, String) {
    let rad = degrees.to_radians();
    (
        fmt_coord(CENTER_X + radius * rad.cos()),
        fmt_coord(CENTER_Y + radius * rad.sin()),
    )
}

/// Path for one slice. `inner == 0` draws a wedge from the center, otherwise
/// a ring segment: outer arc forward, inner arc back.
fn slice_path(start: f64, sweep: f64, inner: f64) -> String {
    // An arc whose endpoints coincide draws nothing, so a whole circle is
    // split into two half arcs.
    if sweep >= 360.0 {
        return full_circle_path(start, inner);
    }

    let end = start + sweep;
    let large = if sweep > 180.0 { 1 } else { 0 };
    let r = fmt_coord(RADIUS);
    let (x1, y1) = polar(RADIUS, start);
    let (x2, y2) = polar(RADIUS, end);

    if inner > 0.0 {
        let ri = fmt_coord(inner);
        let (ix1, iy1) = polar(inner, start);
        let (ix2, iy2) = polar(inner, end);
        format!(
            "M {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} L {ix2} {iy2} A {ri} {ri} 0 {large} 0 {ix1} {iy1} Z"
        )
    } else {
        let cx = fmt_coord(CENTER_X);
        let cy = fmt_coord(CENTER_Y);
        format!("M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z")
    }
}

fn full_circle_path(start: f64, inner: f64) -> String {
    let ring = |radius: f64, sweep_flag: u8| {
        let r = fmt_coord(radius);
        let (x1, y1) = polar(radius, start);
        let (xm, ym) = polar(radius, start + 180.0);
        format!("M {x1} {y1} A {r} {r} 0 1 {sweep_flag} {xm} {ym} A {r} {r} 0 1 {sweep_flag} {x1} {y1} Z")
    };
    if inner > 0.0 {
        format!("{} {}", ring(RADIUS, 1), ring(inner, 0))
    } else {
        ring(RADIUS, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_percentages_and_angles() {
        let chart = compute(
            &labels(&["a", "b", "c"]),
            &Dataset::new("S", vec![1.0, 1.0, 2.0], ""),
            false,
        );
        let pct: Vec<f64> = chart.slices.iter().map(|s| s.percentage).collect();
        let sweeps: Vec<f64> = chart.slices.iter().map(|s| s.sweep).collect();
        assert_eq!(pct, vec![25.0, 25.0, 50.0]);
        assert_eq!(sweeps, vec![90.0, 90.0, 180.0]);
        assert_eq!(pct.iter().sum::<f64>(), 100.0);
        assert_eq!(sweeps.iter().sum::<f64>(), 360.0);
        assert_eq!(chart.slices[0].start_angle, -90.0);
        assert_eq!(chart.slices[1].start_angle, 0.0);
        assert_eq!(chart.slices[2].end_angle(), 270.0);
        assert!(!chart.slices[2].large_arc);
    }

    #[test]
    fn test_wedge_path() {
        let chart = compute(&labels(&["a", "b"]), &Dataset::new("S", vec![1.0, 3.0], ""), false);
        assert_eq!(chart.slices[0].path, "M 200 200 L 200 80 A 120 120 0 0 1 320 200 Z");
        assert!(chart.slices[1].large_arc);
        assert_eq!(chart.slices[1].path, "M 200 200 L 320 200 A 120 120 0 1 1 200 80 Z");
    }

    #[test]
    fn test_doughnut_ring_path() {
        let chart = compute(&labels(&["a", "b"]), &Dataset::new("S", vec![1.0, 1.0], ""), true);
        assert!(chart.doughnut);
        assert_eq!(chart.inner_radius, 60.0);
        assert_eq!(
            chart.slices[0].path,
            "M 200 80 A 120 120 0 0 1 200 320 L 200 260 A 60 60 0 0 0 200 140 Z"
        );
    }

    #[test]
    fn test_single_value_draws_full_circle() {
        let chart = compute(&labels(&["all"]), &Dataset::new("S", vec![7.0], ""), false);
        let slice = &chart.slices[0];
        assert_eq!(slice.sweep, 360.0);
        assert_eq!(slice.percentage, 100.0);
        assert_eq!(
            slice.path,
            "M 200 80 A 120 120 0 1 1 200 320 A 120 120 0 1 1 200 80 Z"
        );
    }

    #[test]
    fn test_zero_total() {
        let chart = compute(&labels(&["a", "b"]), &Dataset::new("S", vec![0.0, 0.0], ""), true);
        assert_eq!(chart.total, 0.0);
        for slice in &chart.slices {
            assert_eq!(slice.percentage, 0.0);
            assert_eq!(slice.sweep, 0.0);
            assert!(!slice.path.contains("NaN"));
        }
    }

    #[test]
    fn test_negative_values_count_as_zero() {
        let chart = compute(&labels(&["a", "b"]), &Dataset::new("S", vec![-5.0, 5.0], ""), false);
        assert_eq!(chart.total, 5.0);
        assert_eq!(chart.slices[0].value, 0.0);
        assert_eq!(chart.slices[1].percentage, 100.0);
    }

    #[test]
    fn test_palette_cycles_and_labels_pad() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let chart = compute(&labels(&["x"]), &Dataset::new("S", values, ""), false);
        assert_eq!(chart.slices[7].color, PALETTE[0]);
        assert_eq!(chart.slices[8].color, PALETTE[1]);
        assert_eq!(chart.slices[0].label, "x");
        assert_eq!(chart.slices[1].label, "");
    }

    #[test]
    fn test_legend_text() {
        let chart = compute(
            &labels(&["Desktop", "Mobile"]),
            &Dataset::new("S", vec![45.0, 55.0], ""),
            false,
        );
        assert_eq!(chart.slices[0].legend_text(), "Desktop: 45 (45.0%)");
    }
}
