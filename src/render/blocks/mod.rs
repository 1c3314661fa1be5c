//! Per-type block templates.
//!
//! One function per component type, named after the type. Each takes a
//! [`Block`] and returns the block's markup without the editor frame. The
//! catalog's registry dispatches to these by name.
//!
//! Templates are total: data is read through [`Fields`], so a missing field
//! renders empty or falls back to a default color, and a missing list renders
//! no items.

mod collections;
mod graph;
mod sections;

pub use collections::{
    accordion, blog, cards, faq, features, gallery, logos, metrics, portfolio, pricing, progress,
    social, stats, steps, tabs, team, testimonials, timeline,
};
pub use graph::graph;
pub use sections::{
    banner, callout, columns, contact, countdown, cta, footer, hero, image, imagetext, map,
    navbar, newsletter, quote, separator, text, video,
};

use crate::data::Fields;
use crate::markup::{Element, Style, el};

/// Fallback colors shared by several templates.
pub const BUTTON_COLOR: &str = "#0066cc";
pub const BUTTON_TEXT_COLOR: &str = "#ffffff";
pub const TEXT_COLOR: &str = "#1a1a1a";
pub const MUTED_COLOR: &str = "#64748b";
pub const ACCENT_COLOR: &str = "#0066cc";

/// What a template sees of a component instance.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub id: u64,
    pub data: Fields<'a>,
}

impl<'a> Block<'a> {
    pub fn new(id: u64, data: Fields<'a>) -> Self {
        Self { id, data }
    }

    /// Items of a repeating list, each viewed as an object.
    pub fn items(&self, list: &str) -> impl Iterator<Item = Fields<'a>> + use<'a> {
        self.data.list(list).iter().map(Fields::of)
    }
}

// ============================================================================
// BACKGROUND
// ============================================================================

/// Gradient stops used when a gradient background has no colors set.
const GRADIENT_START: &str = "#667eea";
const GRADIENT_END: &str = "#764ba2";

/// CSS background for types with a solid/gradient toggle.
///
/// `backgroundType == "gradient"` composes a 135° two-stop gradient from
/// `gradientStart` and `gradientEnd`; anything else uses `background`, then
/// `backgroundColor`.
pub fn resolve_background(data: Fields<'_>) -> String {
    if data.text("backgroundType") == "gradient" {
        return format!(
            "linear-gradient(135deg, {}, {})",
            data.text_or("gradientStart", GRADIENT_START),
            data.text_or("gradientEnd", GRADIENT_END)
        );
    }
    let solid = data.text("background");
    if solid.is_empty() { data.text("backgroundColor") } else { solid }
}

// ============================================================================
// SHARED PIECES
// ============================================================================

/// Centered content column of the given width.
fn container(max_width: &str) -> Element {
    el("div").style(Style::new().set("max-width", max_width).raw("margin: 0 auto"))
}

/// The standard section padding with an optional background.
fn section(background: Option<String>) -> Element {
    let style = Style::new().raw("padding: 4rem 2rem");
    let style = match background {
        Some(bg) => style.set("background", bg),
        None => style,
    };
    el("div").style(style)
}

/// Centered section title.
fn heading(content: String, margin_bottom: &'static str) -> Element {
    el("h2")
        .style(
            Style::new()
                .raw("font-size: 2rem; text-align: center")
                .set("margin-bottom", margin_bottom),
        )
        .text(content)
}

/// Responsive auto-fit grid.
fn grid(min_column: &str, gap: &str) -> Element {
    el("div").style(
        Style::new()
            .raw("display: grid")
            .set(
                "grid-template-columns",
                format!("repeat(auto-fit, minmax({}, 1fr))", min_column),
            )
            .set("gap", gap),
    )
}

/// Optional call-to-action link from `buttonText`, `buttonUrl`,
/// `buttonColor` and `buttonTextColor`. Absent when the text is empty.
fn optional_button(data: Fields<'_>) -> Option<Element> {
    let label = data.text("buttonText");
    if label.is_empty() {
        return None;
    }
    Some(
        el("a")
            .url("href", &data.text("buttonUrl"))
            .style(
                Style::new()
                    .raw("display: inline-block; padding: 0.75rem 2rem")
                    .set("background", data.text_or("buttonColor", BUTTON_COLOR))
                    .set("color", data.text_or("buttonTextColor", BUTTON_TEXT_COLOR))
                    .raw("text-decoration: none; border-radius: 0.5rem; font-weight: 600"),
            )
            .text(label),
    )
}

/// Muted paragraph used for descriptions.
fn muted(content: String) -> Element {
    el("p")
        .style(Style::new().set("color", MUTED_COLOR).raw("line-height: 1.6"))
        .text(content)
}
