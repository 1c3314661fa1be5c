//! The chart block: turns [`crate::chart`] geometry into HTML and SVG.

use super::{Block, MUTED_COLOR};
use crate::chart::{
    BarChart, ChartGeometry, ChartInput, LegendEntry, LineChart, PieChart, fmt_coord, line, pie,
};
use crate::data::format_number;
use crate::markup::{Element, Node, Style, el};

const NO_DATA_MESSAGE: &str = "No data to display. Add labels and datasets in properties.";

pub fn graph(b: &Block<'_>) -> Node {
    let d = b.data;
    let input = ChartInput::from_fields(d);

    let geometry = input.geometry();
    let drawn = match &geometry {
        ChartGeometry::NoData => None,
        ChartGeometry::Bar(bar) => Some((bar_chart(bar, &input.height), Some(&bar.legend))),
        ChartGeometry::Line(line) => Some((line_chart(line, &input.height), Some(&line.legend))),
        ChartGeometry::Pie(pie) => Some((pie_chart(pie, &input.height), None)),
    };

    let panel = match drawn {
        None => el("div")
            .style("background: white; padding: 2rem; border-radius: 1rem; text-align: center;")
            .child(el("p").style(Style::new().set("color", MUTED_COLOR)).text(NO_DATA_MESSAGE)),
        Some((chart, legend)) => el("div")
            .style("background: white; padding: 2rem; border-radius: 1rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1);")
            .attr("data-chart", input.kind.as_str())
            .child(chart)
            .child_opt(legend.filter(|_| input.show_legend).map(|l| legend_row(l))),
    };

    el("div")
        .style("padding: 4rem 2rem; background: #f8fafc;")
        .child(
            el("div")
                .style("max-width: 800px; margin: 0 auto;")
                .child(
                    el("h2")
                        .style("font-size: 2rem; text-align: center; margin-bottom: 3rem;")
                        .text(d.text("heading")),
                )
                .child(panel),
        )
        .into()
}

/// Outer box shared by every chart kind, sized by the `height` field.
fn chart_box(height: &str, extra: &'static str) -> Element {
    el("div").style(Style::new().set("height", height).raw(extra))
}

fn bar_chart(chart: &BarChart, height: &str) -> Element {
    let groups = chart.groups.iter().map(|group| {
        let bars = group.bars.iter().map(|bar| {
            let value = format_number(bar.value);
            el("div")
                .attr("title", format!("{}: {}", bar.series_label, value))
                .style(
                    Style::new()
                        .raw("flex: 1")
                        .set("height", format!("{}%", fmt_coord(bar.height_fraction * 100.0)))
                        .set("background", &bar.color)
                        .raw("border-radius: 0.5rem 0.5rem 0 0")
                        .set("min-height", format!("{}px", format_number(bar.min_height_px)))
                        .raw("transition: height 0.3s; position: relative"),
                )
                .child_opt(bar.annotated.then(|| {
                    el("div")
                        .style("position: absolute; top: -20px; left: 50%; transform: translateX(-50%); font-size: 0.75rem; font-weight: 600; white-space: nowrap;")
                        .text(value.clone())
                }))
        });
        el("div")
            .style("flex: 1; display: flex; flex-direction: column; align-items: center; gap: 0.5rem;")
            .child(
                el("div")
                    .style("width: 100%; height: 100%; display: flex; align-items: flex-end; justify-content: center; gap: 0.25rem;")
                    .children(bars),
            )
            .child(
                el("div")
                    .style("font-size: 0.875rem; font-weight: 600; margin-top: 0.5rem;")
                    .text(group.label.clone()),
            )
    });
    chart_box(
        height,
        "display: flex; align-items: flex-end; justify-content: space-around; gap: 1rem; padding: 2rem",
    )
    .children(groups)
}

fn svg_text(x: f64, y: f64, size: &'static str, fill: &str, content: String) -> Element {
    el("text")
        .attr("x", fmt_coord(x))
        .attr("y", fmt_coord(y))
        .attr("text-anchor", "middle")
        .attr("font-size", size)
        .attr("fill", fill)
        .text(content)
}

fn line_chart(chart: &LineChart, height: &str) -> Element {
    let right = chart.width - line::PADDING;
    let left = line::PADDING;

    let gridlines = chart.gridlines.iter().map(|&y| {
        el("line")
            .attr("x1", fmt_coord(left))
            .attr("y1", fmt_coord(y))
            .attr("x2", fmt_coord(right))
            .attr("y2", fmt_coord(y))
            .attr("stroke", "#e2e8f0")
            .attr("stroke-width", "1")
    });

    let labels = chart
        .x_labels
        .iter()
        .map(|l| svg_text(l.x, l.y, "12", MUTED_COLOR, l.text.clone()));

    let series = chart.series.iter().map(|s| {
        let points = s.points.iter().flat_map(|p| {
            let dot = el("circle")
                .attr("cx", fmt_coord(p.x))
                .attr("cy", fmt_coord(p.y))
                .attr("r", format_number(line::POINT_RADIUS))
                .attr("fill", &s.color);
            let annotation = s.annotated.then(|| {
                svg_text(p.x, p.annotation_y(), "11", &s.color, format_number(p.value))
                    .attr("font-weight", "600")
            });
            std::iter::once(dot).chain(annotation)
        });
        el("g")
            .child(
                el("path")
                    .attr("d", s.path.clone())
                    .attr("fill", "none")
                    .attr("stroke", &s.color)
                    .attr("stroke-width", "3")
                    .attr("opacity", "0.8"),
            )
            .children(points)
    });

    chart_box(
        height,
        "display: flex; align-items: center; justify-content: center; padding: 2rem",
    )
    .child(
        el("svg")
            .attr("width", format_number(chart.width))
            .attr("height", format_number(chart.height))
            .style("overflow: visible;")
            .children(gridlines)
            .children(labels)
            .children(series),
    )
}

fn pie_chart(chart: &PieChart, height: &str) -> Element {
    let size = format_number(pie::SIZE);
    let (cx, cy) = chart.center;

    let mut svg = el("svg")
        .attr("width", size.clone())
        .attr("height", size)
        .style("overflow: visible;")
        .children(chart.slices.iter().filter(|s| s.sweep > 0.0).map(|slice| {
            el("path")
                .attr("d", slice.path.clone())
                .attr("fill", &slice.color)
                .attr("stroke", "white")
                .attr("stroke-width", "2")
                .attr("fill-rule", "evenodd")
        }));
    if chart.doughnut {
        svg = svg
            .child(
                svg_text(cx, cy, "24", "#334155", format_number(chart.total))
                    .attr("font-weight", "700"),
            )
            .child(svg_text(cx, cy + 20.0, "12", MUTED_COLOR, "Total".to_string()));
    }

    let legend = el("div")
        .style("display: flex; flex-direction: column; gap: 0.75rem;")
        .children(chart.slices.iter().map(|slice| {
            el("div")
                .style("display: flex; align-items: center; gap: 0.75rem;")
                .child(el("div").style(
                    Style::new()
                        .raw("width: 16px; height: 16px")
                        .set("background", &slice.color)
                        .raw("border-radius: 0.25rem"),
                ))
                .child(
                    el("span")
                        .style("font-size: 0.875rem; font-weight: 500;")
                        .text(slice.legend_text()),
                )
        }));

    chart_box(
        height,
        "display: flex; align-items: center; justify-content: center; padding: 2rem; gap: 3rem",
    )
    .child(svg)
    .child(legend)
}

fn legend_row(entries: &[LegendEntry]) -> Element {
    el("div")
        .style("margin-top: 2rem; display: flex; gap: 2rem; justify-content: center; flex-wrap: wrap;")
        .children(entries.iter().map(|entry| {
            el("div")
                .style("display: flex; align-items: center; gap: 0.5rem;")
                .child(el("div").style(
                    Style::new()
                        .raw("width: 20px; height: 20px")
                        .set("background", &entry.color)
                        .raw("border-radius: 0.25rem"),
                ))
                .child(el("span").style("font-size: 0.875rem;").text(entry.label.clone()))
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Data, Fields};
    use serde_json::json;

    fn render(value: serde_json::Value) -> Node {
        let data: Data = value.as_object().cloned().unwrap();
        graph(&Block::new(7, Fields::new(&data)))
    }

    #[test]
    fn test_no_data_message() {
        let node = render(json!({"heading": "Empty", "labels": ["A"], "datasets": []}));
        assert!(node.text_content().contains(NO_DATA_MESSAGE));
        let node = render(json!({"heading": "Empty"}));
        assert!(node.text_content().contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_bar_heights_and_annotation() {
        let node = render(json!({
            "chartType": "bar",
            "labels": ["A", "B"],
            "datasets": [
                {"label": "S", "data": [50, 100], "color": "#123456"},
                {"label": "T", "data": [10, 20], "color": "#654321"}
            ],
            "height": "300px",
            "showLegend": true
        }));
        let html = node.to_html();
        assert!(html.contains("height: 50%;"));
        assert!(html.contains("height: 100%;"));
        assert!(html.contains(r#"title="S: 50""#));
        // Values of the second series only appear in tooltips.
        assert!(!node.text_content().contains("20"));
        assert!(node.text_content().contains("100"));
    }

    #[test]
    fn test_legend_toggle() {
        let data = json!({
            "chartType": "line",
            "labels": ["A"],
            "datasets": [{"label": "Visitors", "data": [1]}],
            "showLegend": false
        });
        assert!(!render(data).text_content().contains("Visitors"));
    }

    #[test]
    fn test_line_svg() {
        let node = render(json!({
            "chartType": "line",
            "labels": ["A", "B"],
            "datasets": [{"label": "S", "data": [0, 100]}],
            "height": "400px"
        }));
        let paths = node.find_all("path");
        assert_eq!(paths[0].get_attr("d"), Some("M 60 340 L 540 60"));
        assert_eq!(node.find_all("line").len(), 5);
        assert_eq!(node.find_all("circle").len(), 2);
    }

    #[test]
    fn test_doughnut_total_and_legend() {
        let node = render(json!({
            "chartType": "doughnut",
            "labels": ["A", "B", "C"],
            "datasets": [{"label": "S", "data": [1, 1, 2]}]
        }));
        let text = node.text_content();
        assert!(text.contains("Total"));
        assert!(text.contains("C: 2 (50.0%)"));
        assert_eq!(node.find_all("path").len(), 3);
    }
}
