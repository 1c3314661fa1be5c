//! Repeating sub-lists owned by component types, and the item each list's
//! "add" button appends.

use serde_json::{Value, json};

use super::ComponentKind;
use crate::chart::PALETTE;
use crate::data::Fields;

/// Fewest items a repeating list may hold.
pub const MIN_ITEMS: usize = 1;

/// A repeating list inside a component's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpec {
    /// Key of the list in the component data.
    pub name: &'static str,
    /// Section heading in the properties form.
    pub title: &'static str,
    /// Singular noun for one entry ("Feature", "Plan").
    pub item_label: &'static str,
}

macro_rules! spec {
    ($name:literal, $title:literal, $item_label:literal) => {
        ListSpec {
            name: $name,
            title: $title,
            item_label: $item_label,
        }
    };
}

/// Lists owned by a component type. Most own none or one.
pub fn lists(kind: ComponentKind) -> &'static [ListSpec] {
    use ComponentKind::*;
    match kind {
        Features => &[spec!("features", "Features", "Feature")],
        Gallery => &[spec!("images", "Images", "Image")],
        Team => &[spec!("members", "Team Members", "Member")],
        Stats => &[spec!("stats", "Stats", "Stat")],
        Faq => &[spec!("faqs", "Questions", "Question")],
        Logos => &[spec!("logos", "Logos", "Logo")],
        Timeline => &[spec!("events", "Events", "Event")],
        Footer => &[spec!("columns", "Footer Columns", "Column")],
        Blog => &[spec!("posts", "Blog Posts", "Post")],
        Progress => &[spec!("skills", "Skills", "Skill")],
        Social => &[spec!("links", "Social Links", "Link")],
        Testimonials => &[spec!("testimonials", "Testimonials", "Testimonial")],
        Pricing => &[spec!("plans", "Pricing Plans", "Plan")],
        Accordion => &[spec!("items", "Items", "Item")],
        Tabs => &[spec!("tabs", "Tabs", "Tab")],
        Cards => &[spec!("cards", "Cards", "Card")],
        Steps => &[spec!("steps", "Steps", "Step")],
        Metrics => &[spec!("metrics", "Metrics", "Metric")],
        Portfolio => &[spec!("projects", "Projects", "Project")],
        Graph => &[spec!("datasets", "Datasets", "Dataset")],
        _ => &[],
    }
}

/// Find a list by name on a type.
pub fn list_spec(kind: ComponentKind, name: &str) -> Option<&'static ListSpec> {
    lists(kind).iter().find(|spec| spec.name == name)
}

/// The item appended by a list's add action.
///
/// Some defaults depend on the current data: a new step is numbered after
/// the existing ones, and a new dataset gets one value per label and the next
/// palette color.
pub fn default_item(kind: ComponentKind, list: &str, data: Fields<'_>) -> Option<Value> {
    use ComponentKind::*;
    let item = match (kind, list) {
        (Features, "features") => json!({
            "icon": "⭐",
            "title": "New Feature",
            "description": "Add your description here"
        }),
        (Gallery, "images") => {
            json!("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400")
        }
        (Team, "members") => json!({
            "name": "New Member",
            "role": "Role",
            "image": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400",
            "bio": "Short bio"
        }),
        (Stats, "stats") => json!({ "number": "100+", "label": "New Stat" }),
        (Faq, "faqs") => json!({ "question": "New Question", "answer": "Your answer here" }),
        (Logos, "logos") => {
            json!("https://images.unsplash.com/photo-1599305445671-ac291c95aaa9?w=200&h=80&fit=crop")
        }
        (Timeline, "events") => json!({
            "year": "2025",
            "title": "New Milestone",
            "description": "Describe this milestone"
        }),
        (Footer, "columns") => json!({
            "title": "New Column",
            "links": ["Link 1", "Link 2", "Link 3"]
        }),
        (Blog, "posts") => json!({
            "image": "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=400",
            "title": "New Article",
            "excerpt": "Article description goes here.",
            "date": "Jan 1, 2025",
            "readTime": "5 min read",
            "link": "#"
        }),
        (Progress, "skills") => json!({ "name": "New Skill", "percentage": 75 }),
        (Social, "links") => json!({
            "platform": "New Platform",
            "url": "https://example.com",
            "icon": "🔗"
        }),
        (Testimonials, "testimonials") => json!({
            "rating": 5,
            "text": "Great service!",
            "name": "Customer Name",
            "role": "Position"
        }),
        (Pricing, "plans") => json!({
            "name": "New Plan",
            "price": "19",
            "features": ["Feature 1", "Feature 2", "Feature 3"],
            "buttonText": "Get Started",
            "buttonUrl": "#"
        }),
        (Accordion, "items") => json!({ "title": "New Question", "content": "Your answer here" }),
        (Tabs, "tabs") => json!({ "title": "New Tab", "content": "Tab content here" }),
        (Cards, "cards") => json!({
            "icon": "⭐",
            "title": "New Card",
            "description": "Description here"
        }),
        (Steps, "steps") => {
            let next = data.list("steps").len() + 1;
            json!({ "number": next.to_string(), "title": "New Step", "description": "Description" })
        }
        (Metrics, "metrics") => json!({ "number": "100+", "label": "New Metric", "icon": "📊" }),
        (Portfolio, "projects") => json!({
            "image": "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500",
            "title": "New Project",
            "category": "Category"
        }),
        (Graph, "datasets") => {
            let existing = data.list("datasets").len();
            let values: Vec<u32> = (0..data.list("labels").len())
                .map(|i| sample_value(i, existing))
                .collect();
            json!({
                "label": format!("Dataset {}", existing + 1),
                "data": values,
                "color": PALETTE[existing % PALETTE.len()]
            })
        }
        _ => return None,
    };
    Some(item)
}

/// Placeholder value for a new dataset: a gentle zig-zag in 10..=100 that
/// differs between datasets.
fn sample_value(label_index: usize, dataset_index: usize) -> u32 {
    let step = (label_index * 17 + dataset_index * 29) % 91;
    10 + step as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Data;

    #[test]
    fn test_feature_default() {
        let data = Data::new();
        let item = default_item(ComponentKind::Features, "features", Fields::new(&data)).unwrap();
        assert_eq!(item["title"], "New Feature");
        assert_eq!(item["icon"], "⭐");
    }

    #[test]
    fn test_step_numbered_after_existing() {
        let data = ComponentKind::Steps.template_data();
        let item = default_item(ComponentKind::Steps, "steps", Fields::new(&data)).unwrap();
        assert_eq!(item["number"], "4");
    }

    #[test]
    fn test_dataset_matches_labels_and_cycles_palette() {
        let data = ComponentKind::Graph.template_data();
        let item = default_item(ComponentKind::Graph, "datasets", Fields::new(&data)).unwrap();
        assert_eq!(item["label"], "Dataset 3");
        assert_eq!(item["color"], PALETTE[2]);
        let values = item["data"].as_array().unwrap();
        assert_eq!(values.len(), 6);
        assert!(values.iter().all(|v| {
            let n = v.as_u64().unwrap();
            (10..=100).contains(&n)
        }));
    }

    #[test]
    fn test_unknown_list_has_no_default() {
        let data = Data::new();
        assert!(default_item(ComponentKind::Hero, "features", Fields::new(&data)).is_none());
        assert!(default_item(ComponentKind::Features, "plans", Fields::new(&data)).is_none());
    }

    #[test]
    fn test_every_list_has_a_default_item() {
        for kind in ComponentKind::ALL {
            let data = kind.template_data();
            for spec in lists(*kind) {
                assert!(
                    default_item(*kind, spec.name, Fields::new(&data)).is_some(),
                    "{}.{} has no default item",
                    kind.type_name(),
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_list_spec_lookup() {
        assert_eq!(
            list_spec(ComponentKind::Pricing, "plans").map(|s| s.item_label),
            Some("Plan")
        );
        assert!(list_spec(ComponentKind::Pricing, "features").is_none());
    }
}
