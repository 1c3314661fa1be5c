//! Property-based invariant tests for documents, forms and chart geometry.
//!
//! Verifies:
//! 1. Moving an instance and moving it back restores the order
//! 2. Removing an instance keeps the others in order
//! 3. Rendering is deterministic and draws one frame per instance
//! 4. Comma lists are stable under split, join, split
//! 5. Pie slices cover the full circle and their percentages sum to 100
//! 6. Bar heights stay within the scale

use proptest::prelude::*;
use tessera::catalog::ComponentKind;
use tessera::chart::{self, ChartGeometry, ChartKind, Dataset};
use tessera::document::{Direction, Document};
use tessera::render;
use tessera::schema::{join_comma_list, split_comma_list};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_type_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        (0..ComponentKind::ALL.len()).prop_map(|i| ComponentKind::ALL[i].type_name()),
        1..12,
    )
}

fn document_of(types: &[&str]) -> Document {
    let mut doc = Document::new(types.len());
    for type_name in types {
        doc.add_instance(type_name).unwrap();
    }
    doc
}

fn ids(doc: &Document) -> Vec<u64> {
    doc.instances().iter().map(|i| i.id).collect()
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("L{}", i)).collect()
}

// ── Document ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn move_up_then_down_restores_order(types in arb_type_names(), pick in any::<prop::sample::Index>()) {
        let mut doc = document_of(&types);
        let before = ids(&doc);
        let id = before[pick.index(before.len())];
        if doc.move_instance(id, Direction::Up) {
            prop_assert!(doc.move_instance(id, Direction::Down));
        }
        prop_assert_eq!(ids(&doc), before);
    }

    #[test]
    fn remove_keeps_relative_order(types in arb_type_names(), pick in any::<prop::sample::Index>()) {
        let mut doc = document_of(&types);
        let mut expected = ids(&doc);
        let id = expected.remove(pick.index(expected.len()));
        prop_assert!(doc.remove_instance(id).is_some());
        prop_assert_eq!(ids(&doc), expected);
    }

    #[test]
    fn render_is_deterministic(types in arb_type_names()) {
        let doc = document_of(&types);
        let first = render::render_document(&doc).to_html();
        let second = render::render_document(&doc).to_html();
        prop_assert_eq!(first.matches("data-action=\"delete\"").count(), types.len());
        prop_assert_eq!(first, second);
    }

    // ── Forms ─────────────────────────────────────────────────────────

    #[test]
    fn comma_list_is_stable(raw in "[a-z ,]{0,40}") {
        let items = split_comma_list(&raw);
        let values: Vec<serde_json::Value> = items.iter().cloned().map(serde_json::Value::String).collect();
        prop_assert_eq!(split_comma_list(&join_comma_list(&values)), items);
    }

    // ── Charts ────────────────────────────────────────────────────────

    #[test]
    fn pie_covers_full_circle(data in prop::collection::vec(0.0f64..1000.0, 1..8)) {
        prop_assume!(data.iter().sum::<f64>() > 0.0);
        let ds = vec![Dataset::new("s", data.clone(), "")];
        let ChartGeometry::Pie(pie) = chart::compute(ChartKind::Pie, &labels(data.len()), &ds, None) else {
            panic!("expected pie geometry");
        };
        let percent: f64 = pie.slices.iter().map(|s| s.percentage).sum();
        prop_assert!((percent - 100.0).abs() < 1e-6);
        let end = pie.slices.last().map(|s| s.end_angle()).unwrap_or_default();
        prop_assert!((end - 270.0).abs() < 1e-6);
    }

    #[test]
    fn bar_heights_within_scale(data in prop::collection::vec(0.0f64..1000.0, 1..8)) {
        let ds = vec![Dataset::new("s", data.clone(), "")];
        let ChartGeometry::Bar(bar) = chart::compute(ChartKind::Bar, &labels(data.len()), &ds, None) else {
            panic!("expected bar geometry");
        };
        for group in &bar.groups {
            for b in &group.bars {
                prop_assert!((0.0..=1.0).contains(&b.height_fraction));
            }
        }
    }
}
