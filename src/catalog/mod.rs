//! # Component Catalog
//!
//! The fixed set of building blocks a page can be assembled from. Each entry
//! pairs a type name with a display label, a default data template, a render
//! function, and a properties-form function.
//!
//! ## Adding a component type
//!
//! 1. Write the template in [`templates`]
//! 2. Write the render function in [`crate::render::blocks`]
//! 3. Write the form function in [`crate::schema::forms`]
//! 4. Add one line to the `define_components!` invocation below
//!
//! If the type owns a repeating list, also describe it in [`items`].

pub mod items;
pub mod templates;

use serde::{Deserialize, Serialize};

use crate::data::{Data, Fields};
use crate::markup::Node;
use crate::render::blocks::{self, Block};
use crate::schema::forms;
use crate::schema::FormItem;

pub use items::{ListSpec, default_item, list_spec, lists};

/// Renders one component's content from its data.
pub type RenderFn = fn(&Block<'_>) -> Node;

/// Builds the editable fields for one component's data.
pub type FormFn = fn(Fields<'_>) -> Vec<FormItem>;

// ============================================================================
// REGISTRY
// ============================================================================

/// Generates [`ComponentKind`] and its dispatch tables from one list.
///
/// Each entry is `Variant => "type_name", "Label", function_name;` where
/// `function_name` names the template, render, and form functions alike.
macro_rules! define_components {
    ($($variant:ident => $name:literal, $label:literal, $func:ident;)+) => {
        /// A registered component type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentKind {
            $($variant,)+
        }

        impl ComponentKind {
            /// Every registered type, in palette order.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$variant,)+];

            /// Look up a type by its persisted name.
            pub fn parse(type_name: &str) -> Option<Self> {
                match type_name {
                    $($name => Some(ComponentKind::$variant),)+
                    _ => None,
                }
            }

            /// The persisted type name (the `type` field of an instance).
            pub fn type_name(self) -> &'static str {
                match self { $(ComponentKind::$variant => $name,)+ }
            }

            /// Human-readable label for palettes and form headers.
            pub fn label(self) -> &'static str {
                match self { $(ComponentKind::$variant => $label,)+ }
            }

            /// A fresh copy of this type's default data.
            pub fn template_data(self) -> Data {
                match self { $(ComponentKind::$variant => templates::$func(),)+ }
            }

            pub fn render_fn(self) -> RenderFn {
                match self { $(ComponentKind::$variant => blocks::$func,)+ }
            }

            pub fn form_fn(self) -> FormFn {
                match self { $(ComponentKind::$variant => forms::$func,)+ }
            }
        }
    };
}

define_components! {
    Hero => "hero", "Hero Section", hero;
    Text => "text", "Text Block", text;
    Image => "image", "Image", image;
    Features => "features", "Features", features;
    Cta => "cta", "Call to Action", cta;
    Gallery => "gallery", "Gallery", gallery;
    Team => "team", "Team", team;
    Stats => "stats", "Stats", stats;
    Faq => "faq", "FAQ", faq;
    Contact => "contact", "Contact Form", contact;
    Newsletter => "newsletter", "Newsletter", newsletter;
    Logos => "logos", "Logo Cloud", logos;
    Timeline => "timeline", "Timeline", timeline;
    Video => "video", "Video", video;
    Footer => "footer", "Footer", footer;
    Navbar => "navbar", "Navigation Bar", navbar;
    Blog => "blog", "Blog Posts", blog;
    ImageText => "imagetext", "Image + Text", imagetext;
    Callout => "callout", "Callout", callout;
    Progress => "progress", "Progress Bars", progress;
    Social => "social", "Social Links", social;
    Map => "map", "Map", map;
    Testimonials => "testimonials", "Testimonials", testimonials;
    Pricing => "pricing", "Pricing Table", pricing;
    Accordion => "accordion", "Accordion", accordion;
    Tabs => "tabs", "Tabs", tabs;
    Cards => "cards", "Cards", cards;
    Countdown => "countdown", "Countdown", countdown;
    Quote => "quote", "Quote", quote;
    Steps => "steps", "Steps", steps;
    Banner => "banner", "Banner", banner;
    Metrics => "metrics", "Metrics", metrics;
    Portfolio => "portfolio", "Portfolio", portfolio;
    Columns => "columns", "Columns", columns;
    Separator => "separator", "Separator", separator;
    Graph => "graph", "Chart", graph;
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// The default shape of a component type.
///
/// Every call to [`template`] builds new data, so a template can never alias
/// an instance created from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    #[serde(rename = "type")]
    pub type_name: String,
    pub data: Data,
}

/// Type name and label of a registered component, as listed to the editor.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentTypeMeta {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
    /// Names of the repeating lists this type owns.
    pub lists: Vec<&'static str>,
}

/// Metadata for every registered type, in palette order.
pub fn component_types() -> Vec<ComponentTypeMeta> {
    ComponentKind::ALL
        .iter()
        .map(|kind| ComponentTypeMeta {
            type_name: kind.type_name(),
            label: kind.label(),
            lists: lists(*kind).iter().map(|l| l.name).collect(),
        })
        .collect()
}

/// The template for a type name, or `None` if the type is not registered.
pub fn template(type_name: &str) -> Option<ComponentTemplate> {
    ComponentKind::parse(type_name).map(|kind| ComponentTemplate {
        type_name: kind.type_name().to_string(),
        data: kind.template_data(),
    })
}
