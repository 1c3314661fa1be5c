//! # Renderer
//!
//! Turns component instances into markup.
//!
//! - [`render_instance`]: one instance inside its editor frame (selection
//!   border, move and delete controls)
//! - [`render_document`]: the editor canvas for a whole document
//! - [`render_page`]: a standalone HTML page for export, without editor chrome
//!
//! Rendering is pure. The same document always renders to the same markup.
//!
//! ## Example
//!
//! ```
//! use tessera::document::Document;
//! use tessera::render;
//!
//! let mut doc = Document::new(10);
//! let id = doc.add_instance("hero").unwrap();
//! doc.select(Some(id));
//!
//! let html = render::render_document(&doc).to_html();
//! assert!(html.contains("Welcome to Your Website"));
//! assert!(html.contains("border: 2px solid #0066ff;"));
//! ```

pub mod blocks;

use tracing::debug;

use crate::data::Fields;
use crate::document::{ComponentInstance, Document};
use crate::markup::{Element, Node, Style, el, escape_text};
use crate::settings::Settings;

pub use blocks::{Block, resolve_background};

/// Border color of the selected instance and its move controls.
pub const SELECTED_COLOR: &str = "#0066ff";
const DELETE_COLOR: &str = "#ef4444";

const PLACEHOLDER_TEXT: &str = "Drag components here to start building";
const UNKNOWN_TYPE_TEXT: &str = "Unknown component type";

// ============================================================================
// BLOCK CONTENT
// ============================================================================

/// The bare markup of one instance, without the editor frame.
///
/// Unregistered types render a placeholder rather than failing.
pub fn render_content(instance: &ComponentInstance) -> Node {
    match instance.kind() {
        Some(kind) => {
            let block = Block::new(instance.id, Fields::new(&instance.data));
            (kind.render_fn())(&block)
        }
        None => {
            debug!(id = instance.id, type_name = %instance.type_name, "rendering unknown component type");
            el("div").style("padding: 2rem;").text(UNKNOWN_TYPE_TEXT).into()
        }
    }
}

// ============================================================================
// EDITOR CANVAS
// ============================================================================

/// Render one instance inside its editor frame.
pub fn render_instance(instance: &ComponentInstance, selected: bool) -> Node {
    let class = if selected { "canvas-component selected" } else { "canvas-component" };
    el("div")
        .class(class)
        .attr("data-id", instance.id.to_string())
        .attr("data-type", instance.type_name.clone())
        .style(
            Style::new()
                .raw("position: relative")
                .set("border", format!("2px solid {}", if selected { SELECTED_COLOR } else { "transparent" }))
                .raw("cursor: pointer; transition: all 0.2s; min-height: 60px"),
        )
        .child(render_content(instance))
        .child(controls(instance.id, selected))
        .into()
}

fn controls(id: u64, visible: bool) -> Element {
    el("div")
        .class("component-controls")
        .style(
            Style::new()
                .raw("position: absolute; top: 0.5rem; right: 0.5rem; display: flex; gap: 0.5rem")
                .set("opacity", if visible { "1" } else { "0" })
                .raw("transition: opacity 0.2s; z-index: 1000"),
        )
        .child(control_button(id, "up", "Move Up", "\u{2191}", SELECTED_COLOR))
        .child(control_button(id, "down", "Move Down", "\u{2193}", SELECTED_COLOR))
        .child(control_button(id, "delete", "Delete", "\u{00d7}", DELETE_COLOR))
}

fn control_button(id: u64, action: &'static str, title: &'static str, glyph: &'static str, color: &str) -> Element {
    el("button")
        .attr("type", "button")
        .attr("data-action", action)
        .attr("data-id", id.to_string())
        .attr("title", title)
        .style(
            Style::new()
                .raw("padding: 0.5rem; background: white")
                .set("border", format!("2px solid {}", color))
                .raw("border-radius: 0.375rem; cursor: pointer; box-shadow: 0 2px 8px rgba(0,0,0,0.15); font-weight: 700")
                .set("color", color)
                .raw("width: 36px; height: 36px; display: flex; align-items: center; justify-content: center"),
        )
        .text(glyph)
}

/// Render the editor canvas. An empty document shows the drop placeholder.
pub fn render_document(document: &Document) -> Node {
    render_instances(document.instances(), document.selected_id())
}

/// Render a list of instances as the editor canvas, highlighting `selected`.
pub fn render_instances(instances: &[ComponentInstance], selected: Option<u64>) -> Node {
    if instances.is_empty() {
        return placeholder();
    }
    Node::Fragment(
        instances
            .iter()
            .map(|instance| render_instance(instance, selected == Some(instance.id)))
            .collect(),
    )
}

fn placeholder() -> Node {
    el("div")
        .class("canvas-placeholder")
        .style("min-height: 400px; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 4rem 2rem; color: var(--text-tertiary);")
        .child(
            el("div")
                .class("placeholder-icon")
                .style("font-size: 4rem; margin-bottom: 1rem;")
                .text("\u{1f446}"),
        )
        .child(el("p").text(PLACEHOLDER_TEXT))
        .into()
}

// ============================================================================
// EXPORT
// ============================================================================

/// Render a complete HTML page for export.
pub fn render_page(instances: &[ComponentInstance], settings: &Settings) -> String {
    let body: String = instances
        .iter()
        .map(|instance| render_content(instance).to_html())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_text(&settings.title),
        css = settings.theme.stylesheet().replace("</", "<\\/"),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Data;
    use serde_json::json;

    fn instance(id: u64, type_name: &str, data: serde_json::Value) -> ComponentInstance {
        ComponentInstance {
            id,
            type_name: type_name.to_string(),
            data: data.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_frame_selected() {
        let node = render_instance(&instance(3, "text", json!({"heading": "Hi"})), true);
        let divs = node.find_all("div");
        let frame = divs[0];
        assert_eq!(frame.get_attr("data-id"), Some("3"));
        assert_eq!(frame.get_attr("class"), Some("canvas-component selected"));
        assert!(frame.get_attr("style").unwrap().contains("border: 2px solid #0066ff;"));
        assert_eq!(node.find_all("button").len(), 3);
    }

    #[test]
    fn test_frame_unselected() {
        let node = render_instance(&instance(3, "text", json!({})), false);
        let divs = node.find_all("div");
        let frame = divs[0];
        assert_eq!(frame.get_attr("class"), Some("canvas-component"));
        assert!(frame.get_attr("style").unwrap().contains("border: 2px solid transparent;"));
    }

    #[test]
    fn test_unknown_type_placeholder() {
        let node = render_instance(&instance(1, "carousel", json!({"x": 1})), false);
        assert!(node.text_content().contains("Unknown component type"));
    }

    #[test]
    fn test_empty_document_placeholder() {
        let doc = Document::new(10);
        let node = render_document(&doc);
        assert!(node.text_content().contains("Drag components here to start building"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let node = render_content(&instance(1, "text", json!({"heading": "<img src=x onerror=alert(1)>"})));
        let html = node.to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_page_has_no_editor_chrome() {
        let instances = vec![instance(1, "hero", json!({"title": "Landing"}))];
        let settings = Settings {
            title: "A & B".to_string(),
            ..Settings::default()
        };
        let html = render_page(&instances, &settings);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("Landing"));
        assert!(!html.contains("canvas-component"));
        assert!(!html.contains("data-action"));
    }

    #[test]
    fn test_every_template_renders_without_undefined() {
        for kind in crate::catalog::ComponentKind::ALL {
            let inst = ComponentInstance {
                id: 1,
                type_name: kind.type_name().to_string(),
                data: kind.template_data(),
            };
            let html = render_instance(&inst, false).to_html();
            assert!(!html.contains("undefined"), "{} rendered 'undefined'", kind.type_name());
            assert!(!html.contains("Unknown component type"), "{}", kind.type_name());

            let empty = ComponentInstance {
                data: Data::new(),
                ..inst
            };
            let html = render_instance(&empty, false).to_html();
            assert!(!html.contains("undefined"), "{} (empty) rendered 'undefined'", kind.type_name());
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut doc = Document::new(50);
        for kind in crate::catalog::ComponentKind::ALL.iter().take(12) {
            doc.add_instance(kind.type_name()).unwrap();
        }
        assert_eq!(render_document(&doc).to_html(), render_document(&doc).to_html());
    }
}
