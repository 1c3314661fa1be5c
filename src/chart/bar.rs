//! Grouped bar charts.

use serde::Serialize;

use super::{Dataset, LegendEntry, legend, scale_max};

/// Minimum drawn height of a bar with a positive value, so small values stay visible.
pub const BAR_MIN_HEIGHT_PX: f64 = 20.0;

/// Bars for every label, one per dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub max_value: f64,
    pub groups: Vec<BarGroup>,
    pub legend: Vec<LegendEntry>,
}

/// The bars drawn above one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGroup {
    pub label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub dataset_index: usize,
    /// Label of the dataset this bar belongs to, for tooltips.
    pub series_label: String,
    pub value: f64,
    /// Height relative to the tallest possible bar, in `0.0..=1.0`.
    pub height_fraction: f64,
    pub min_height_px: f64,
    pub color: String,
    /// Whether the value is printed above the bar. Only the first series is.
    pub annotated: bool,
}

pub(super) fn compute(labels: &[String], datasets: &[Dataset]) -> BarChart {
    let max_value = scale_max(datasets);

    let groups = labels
        .iter()
        .enumerate()
        .map(|(i, label)| BarGroup {
            label: label.clone(),
            bars: datasets
                .iter()
                .enumerate()
                .map(|(j, dataset)| {
                    let value = dataset.value_at(i);
                    Bar {
                        dataset_index: j,
                        series_label: dataset.label.clone(),
                        value,
                        height_fraction: (value / max_value).clamp(0.0, 1.0),
                        min_height_px: if value > 0.0 { BAR_MIN_HEIGHT_PX } else { 0.0 },
                        color: dataset.display_color().to_string(),
                        annotated: j == 0,
                    }
                })
                .collect(),
        })
        .collect();

    BarChart {
        max_value,
        groups,
        legend: legend(datasets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_height_fractions() {
        let chart = compute(
            &labels(&["A", "B"]),
            &[Dataset::new("S", vec![50.0, 100.0], "#000")],
        );
        assert_eq!(chart.max_value, 100.0);
        assert_eq!(chart.groups[0].bars[0].height_fraction, 0.5);
        assert_eq!(chart.groups[1].bars[0].height_fraction, 1.0);
    }

    #[test]
    fn test_grouping_and_annotation() {
        let chart = compute(
            &labels(&["A", "B", "C"]),
            &[
                Dataset::new("2024", vec![10.0, 20.0, 40.0], "#111"),
                Dataset::new("2023", vec![5.0, 0.0, 80.0], ""),
            ],
        );
        assert_eq!(chart.groups.len(), 3);
        for group in &chart.groups {
            assert_eq!(group.bars.len(), 2);
            assert!(group.bars[0].annotated);
            assert!(!group.bars[1].annotated);
        }
        assert_eq!(chart.max_value, 80.0);
        assert_eq!(chart.groups[2].bars[1].height_fraction, 1.0);
        assert_eq!(chart.groups[0].bars[1].color, "#0066cc");
        assert_eq!(chart.groups[1].bars[1].min_height_px, 0.0);
        assert_eq!(chart.groups[1].bars[0].min_height_px, BAR_MIN_HEIGHT_PX);
    }

    #[test]
    fn test_short_series_pads_with_zero() {
        let chart = compute(
            &labels(&["A", "B", "C"]),
            &[Dataset::new("S", vec![4.0], "")],
        );
        assert_eq!(chart.groups[1].bars[0].value, 0.0);
        assert_eq!(chart.groups[2].bars[0].height_fraction, 0.0);
    }

    #[test]
    fn test_all_zero_does_not_divide_by_zero() {
        let chart = compute(&labels(&["A"]), &[Dataset::new("S", vec![0.0], "")]);
        assert_eq!(chart.max_value, 1.0);
        assert_eq!(chart.groups[0].bars[0].height_fraction, 0.0);
    }

    #[test]
    fn test_negative_values_clamp() {
        let chart = compute(&labels(&["A", "B"]), &[Dataset::new("S", vec![-3.0, 6.0], "")]);
        assert_eq!(chart.groups[0].bars[0].height_fraction, 0.0);
        assert_eq!(chart.groups[0].bars[0].min_height_px, 0.0);
    }

    #[test]
    fn test_legend_defaults() {
        let chart = compute(&labels(&["A"]), &[Dataset::new("", vec![1.0], "")]);
        assert_eq!(chart.legend[0].label, "Dataset");
        assert_eq!(chart.legend[0].color, "#0066cc");
    }
}
