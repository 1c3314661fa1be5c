//! Per-type form functions, one per catalog entry.
//!
//! Each function lists the fields of its type in panel order. Field labels
//! are shown to the user as written.

use super::{FieldKind, FormItem, Scope, column_count, scalar_item, section};
use crate::catalog::ComponentKind;
use crate::data::Fields;

const ALIGN: &[(&str, &str)] = &[("left", "Left"), ("center", "Center"), ("right", "Right")];
const SOLID_OR_GRADIENT: &[(&str, &str)] = &[("solid", "Solid Color"), ("gradient", "Gradient")];
const GRADIENT_OR_SOLID: &[(&str, &str)] = &[("gradient", "Gradient"), ("solid", "Solid Color")];
const MAX_WIDTHS: &[(&str, &str)] = &[
    ("600px", "Small (600px)"),
    ("800px", "Medium (800px)"),
    ("1000px", "Large (1000px)"),
    ("100%", "Full Width"),
];

fn fields(items: impl IntoIterator<Item = super::Field>) -> Vec<FormItem> {
    items.into_iter().map(FormItem::from).collect()
}

/// Button text, link and colors, shared by hero, cta and image + text.
fn button_fields(s: Scope<'_>, text_label: &str) -> [super::Field; 4] {
    [
        s.text(text_label, "buttonText"),
        s.text("Button URL", "buttonUrl"),
        s.color("Button Background Color", "buttonColor"),
        s.color("Button Text Color", "buttonTextColor"),
    ]
}

pub fn hero(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.text("Title", "title"),
        s.long_text("Subtitle", "subtitle"),
        s.color("Text Color", "textColor"),
    ]);
    items.extend(fields(button_fields(s, "Button Text")));
    items.extend(fields([
        s.select("Background Type", "backgroundType", SOLID_OR_GRADIENT),
        s.color("Background Color", "background"),
        s.color("Gradient Start", "gradientStart"),
        s.color("Gradient End", "gradientEnd"),
        s.select("Text Alignment", "textAlign", ALIGN),
        s.select(
            "Min Height",
            "minHeight",
            &[
                ("300px", "Small (300px)"),
                ("400px", "Medium (400px)"),
                ("500px", "Large (500px)"),
                ("100vh", "Full Screen"),
            ],
        ),
    ]));
    items
}

pub fn text(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Heading", "heading"),
        s.long_text("Content", "content"),
        s.select(
            "Heading Size",
            "headingSize",
            &[("1.5rem", "Small"), ("2rem", "Medium"), ("2.5rem", "Large"), ("3rem", "Extra Large")],
        ),
        s.select("Text Alignment", "textAlign", ALIGN),
        s.color("Background Color", "backgroundColor"),
    ])
}

pub fn image(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Image URL", "src"),
        s.file("Or Upload Image", "src"),
        s.text("Alt Text", "alt"),
        s.select("Width", "width", &[("50%", "50%"), ("75%", "75%"), ("100%", "100%")]),
        s.select("Max Width", "maxWidth", MAX_WIDTHS),
        s.select(
            "Border Radius",
            "borderRadius",
            &[
                ("0", "None"),
                ("0.5rem", "Small"),
                ("1rem", "Medium"),
                ("2rem", "Large"),
                ("50%", "Circle"),
            ],
        ),
        s.select("Alignment", "alignment", ALIGN),
    ])
}

pub fn features(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading"), s.color("Background Color", "backgroundColor")]);
    items.push(section(ComponentKind::Features, "features", d, |item, _| {
        vec![
            item.text("Icon (emoji)", "icon"),
            item.text("Title", "title"),
            item.long_text("Description", "description"),
        ]
    }));
    items
}

pub fn cta(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.text("Heading", "heading"),
        s.text("Subtitle", "subtitle"),
        s.color("Text Color", "textColor"),
    ]);
    items.extend(fields(button_fields(s, "Button Text")));
    items.extend(fields([
        s.select("Background Type", "backgroundType", SOLID_OR_GRADIENT),
        s.color("Background Color", "backgroundColor"),
        s.color("Gradient Start", "gradientStart"),
        s.color("Gradient End", "gradientEnd"),
    ]));
    items
}

pub fn gallery(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.select(
            "Columns",
            "columns",
            &[
                ("auto-fit", "Auto"),
                ("1", "1 Column"),
                ("2", "2 Columns"),
                ("3", "3 Columns"),
                ("4", "4 Columns"),
                ("5", "5 Columns"),
            ],
        ),
        s.select(
            "Gap Between Images",
            "gap",
            &[
                ("0.25rem", "Tiny"),
                ("0.5rem", "Small"),
                ("1rem", "Medium"),
                ("1.5rem", "Large"),
                ("2rem", "Extra Large"),
            ],
        ),
        s.select(
            "Image Height",
            "imageHeight",
            &[
                ("150px", "150px"),
                ("200px", "200px"),
                ("250px", "250px"),
                ("300px", "300px"),
                ("400px", "400px"),
                ("auto", "Auto"),
            ],
        ),
    ]);
    items.push(section(ComponentKind::Gallery, "images", d, |item, value| {
        let (list, index) = item.item.unwrap_or(("images", 0));
        vec![
            scalar_item("Image URL", list, index, value, FieldKind::Text),
            scalar_item("Or Upload New Image", list, index, value, FieldKind::File),
        ]
    }));
    items
}

pub fn team(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Team, "members", d, |item, _| {
        vec![
            item.text("Name", "name"),
            item.text("Role", "role"),
            item.text("Bio", "bio"),
            item.text("Image URL", "image"),
            item.file("Or Upload Photo", "image"),
        ]
    }));
    items
}

pub fn stats(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.color("Background Color", "backgroundColor")]);
    items.push(section(ComponentKind::Stats, "stats", d, |item, _| {
        vec![item.text("Number", "number"), item.text("Label", "label")]
    }));
    items
}

pub fn faq(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Faq, "faqs", d, |item, _| {
        vec![item.text("Question", "question"), item.long_text("Answer", "answer")]
    }));
    items
}

pub fn contact(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Heading", "heading"),
        s.text("Subtitle", "subtitle"),
        s.email("Email Address (where form sends to)", "email"),
        s.color("Background Color", "backgroundColor"),
    ])
}

pub fn newsletter(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Heading", "heading"),
        s.text("Subtitle", "subtitle"),
        s.text("Button Text", "buttonText"),
        s.select("Background Type", "backgroundType", GRADIENT_OR_SOLID),
        s.color("Background Color", "backgroundColor"),
        s.color("Gradient Start", "gradientStart"),
        s.color("Gradient End", "gradientEnd"),
    ])
}

pub fn logos(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Logos, "logos", d, |item, value| {
        let (list, index) = item.item.unwrap_or(("logos", 0));
        vec![
            scalar_item("Logo URL", list, index, value, FieldKind::Text),
            scalar_item("Or Upload", list, index, value, FieldKind::File),
        ]
    }));
    items
}

pub fn timeline(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Timeline, "events", d, |item, _| {
        vec![
            item.text("Year", "year"),
            item.text("Title", "title"),
            item.text("Description", "description"),
        ]
    }));
    items
}

pub fn video(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Title", "title"),
        s.text("Video URL", "url"),
        s.select(
            "Aspect Ratio",
            "aspectRatio",
            &[
                ("16/9", "16:9 (Widescreen)"),
                ("4/3", "4:3 (Standard)"),
                ("1/1", "1:1 (Square)"),
                ("21/9", "21:9 (Ultrawide)"),
            ],
        ),
        s.select("Max Width", "maxWidth", MAX_WIDTHS),
    ])
}

pub fn footer(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.text("Company Name", "companyName"),
        s.text("Tagline", "tagline"),
        s.text("Copyright Text", "copyright"),
    ]);
    items.push(section(ComponentKind::Footer, "columns", d, |item, _| {
        vec![
            item.text("Column Title", "title"),
            item.comma_list("Links (comma-separated)", "links", false),
        ]
    }));
    items
}

pub fn navbar(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Brand Name", "brand"),
        s.comma_list("Navigation Links (comma-separated)", "links", false),
        s.text("CTA Button Text", "ctaText"),
        s.text("CTA Button URL", "ctaUrl"),
        s.color("Background Color", "backgroundColor"),
        s.checkbox("Sticky Navigation", "sticky"),
    ])
}

pub fn blog(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Blog, "posts", d, |item, _| {
        vec![
            item.text("Image URL", "image"),
            item.text("Title", "title"),
            item.long_text("Excerpt", "excerpt"),
            item.text("Date", "date"),
            item.text("Read Time", "readTime"),
            item.text("Link URL", "link"),
        ]
    }));
    items
}

pub fn imagetext(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.text("Image URL", "image"),
        s.file("Or Upload Image", "image"),
        s.text("Heading", "heading"),
        s.long_text("Text Content", "text"),
        s.color("Text Color", "textColor"),
    ]);
    items.extend(fields(button_fields(s, "Button Text (optional)")));
    items.extend(fields([
        s.select(
            "Image Position",
            "imagePosition",
            &[("left", "Image Left"), ("right", "Image Right")],
        ),
        s.color("Background Color", "backgroundColor"),
    ]));
    items
}

pub fn callout(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Icon (emoji)", "icon"),
        s.text("Heading", "heading"),
        s.long_text("Text", "text"),
        s.color("Background Color", "backgroundColor"),
        s.color("Border Color", "borderColor"),
    ])
}

pub fn progress(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Progress, "skills", d, |item, _| {
        vec![
            item.text("Skill Name", "name"),
            item.number("Percentage (0-100)", "percentage"),
        ]
    }));
    items
}

pub fn social(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Social, "links", d, |item, _| {
        vec![
            item.text("Platform Name", "platform"),
            item.text("Icon (emoji or letter)", "icon"),
            item.text("URL", "url"),
        ]
    }));
    items
}

pub fn map(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Heading", "heading"),
        s.text("Address", "address"),
        s.long_text("Google Maps Embed URL", "embedUrl"),
    ])
}

pub fn testimonials(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Testimonials, "testimonials", d, |item, _| {
        vec![
            item.numeric_select(
                "Rating (1-5)",
                "rating",
                &[("1", "1 Star"), ("2", "2 Stars"), ("3", "3 Stars"), ("4", "4 Stars"), ("5", "5 Stars")],
            ),
            item.long_text("Review Text", "text"),
            item.text("Name", "name"),
            item.text("Role/Company", "role"),
        ]
    }));
    items
}

pub fn pricing(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Pricing, "plans", d, |item, _| {
        vec![
            item.text("Plan Name", "name"),
            item.text("Price", "price"),
            item.comma_list("Features (comma-separated)", "features", false),
            item.text("Button Text", "buttonText"),
            item.text("Button URL", "buttonUrl"),
        ]
    }));
    items
}

pub fn accordion(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Accordion, "items", d, |item, _| {
        vec![item.text("Title", "title"), item.long_text("Content", "content")]
    }));
    items
}

pub fn tabs(d: Fields<'_>) -> Vec<FormItem> {
    vec![section(ComponentKind::Tabs, "tabs", d, |item, _| {
        vec![item.text("Tab Title", "title"), item.long_text("Content", "content")]
    })]
}

pub fn cards(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Cards, "cards", d, |item, _| {
        vec![
            item.text("Icon (emoji)", "icon"),
            item.text("Title", "title"),
            item.long_text("Description", "description"),
        ]
    }));
    items
}

pub fn countdown(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Heading", "heading"),
        s.text("Subtitle", "subtitle"),
        s.date("Target Date", "targetDate"),
        s.time("Target Time (HH:MM:SS)", "targetTime"),
        s.color("Background Color", "backgroundColor"),
        s.color("Text Color", "textColor"),
    ])
}

pub fn quote(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.long_text("Quote Text", "quote"),
        s.text("Author", "author"),
        s.select(
            "Quote Size",
            "quoteSize",
            &[("1.5rem", "Small"), ("2rem", "Medium"), ("2.5rem", "Large")],
        ),
        s.color("Background Color", "backgroundColor"),
    ])
}

pub fn steps(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Steps, "steps", d, |item, _| {
        vec![
            item.text("Number", "number"),
            item.text("Title", "title"),
            item.long_text("Description", "description"),
        ]
    }));
    items
}

pub fn banner(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.text("Text", "text"),
        s.text("Button Text (optional)", "buttonText"),
        s.text("Button URL", "buttonUrl"),
        s.color("Background Color", "backgroundColor"),
        s.color("Text Color", "textColor"),
        s.checkbox("Show Dismiss Button", "dismissible"),
    ])
}

pub fn metrics(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.color("Background Color", "backgroundColor")]);
    items.push(section(ComponentKind::Metrics, "metrics", d, |item, _| {
        vec![
            item.text("Icon (emoji)", "icon"),
            item.text("Number", "number"),
            item.text("Label", "label"),
        ]
    }));
    items
}

pub fn portfolio(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([s.text("Heading", "heading")]);
    items.push(section(ComponentKind::Portfolio, "projects", d, |item, _| {
        vec![
            item.text("Image URL", "image"),
            item.file("Or Upload Image", "image"),
            item.text("Title", "title"),
            item.text("Category", "category"),
        ]
    }));
    items
}

pub fn columns(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let live = d.text_or("columnCount", "2");
    let mut items = fields([
        column_count(
            "Number of Columns",
            &live,
            &[("1", "1 Column"), ("2", "2 Columns"), ("3", "3 Columns"), ("4", "4 Columns")],
        ),
        s.color("Background Color", "backgroundColor"),
    ]);
    // Columns are fixed slots sized by the count, not an add/remove list.
    for (index, column) in d.list("columns").iter().enumerate() {
        let slot = Scope {
            data: Fields::of(column),
            item: Some(("columns", index)),
        };
        items.push(slot.long_text(&format!("Column {}", index + 1), "content").into());
    }
    items
}

pub fn separator(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    fields([
        s.select(
            "Style",
            "style",
            &[("solid", "Solid"), ("dashed", "Dashed"), ("dotted", "Dotted")],
        ),
        s.select(
            "Width",
            "width",
            &[("25%", "25%"), ("50%", "50%"), ("75%", "75%"), ("100%", "100%")],
        ),
        s.color("Color", "color"),
        s.select(
            "Thickness",
            "thickness",
            &[("1px", "1px"), ("2px", "2px"), ("3px", "3px"), ("4px", "4px")],
        ),
        s.select(
            "Spacing (top/bottom)",
            "spacing",
            &[("1rem", "Small"), ("2rem", "Medium"), ("3rem", "Large"), ("4rem", "Extra Large")],
        ),
    ])
}

pub fn graph(d: Fields<'_>) -> Vec<FormItem> {
    let s = Scope::root(d);
    let mut items = fields([
        s.text("Heading", "heading"),
        s.select(
            "Chart Type",
            "chartType",
            &[
                ("bar", "Bar Chart"),
                ("line", "Line Chart"),
                ("pie", "Pie Chart"),
                ("doughnut", "Doughnut Chart"),
            ],
        ),
        s.comma_list("Labels (comma-separated)", "labels", false),
        s.select(
            "Chart Height",
            "height",
            &[("300px", "Small (300px)"), ("400px", "Medium (400px)"), ("500px", "Large (500px)")],
        ),
        s.checkbox("Show Legend", "showLegend"),
    ]);
    items.push(section(ComponentKind::Graph, "datasets", d, |item, _| {
        let n = item.item.map_or(0, |(_, index)| index) + 1;
        vec![
            item.text(&format!("Dataset {} Label", n), "label"),
            item.comma_list("Data Values (comma-separated numbers)", "data", true),
            item.color("Color", "color"),
        ]
    }));
    items
}
