//! Single-section templates: heroes, banners, forms, embeds and layout pieces.

use serde_json::Value;

use super::{
    BUTTON_COLOR, BUTTON_TEXT_COLOR, Block, MUTED_COLOR, TEXT_COLOR, container, heading, optional_button,
    resolve_background, section,
};
use crate::markup::{Node, Style, el};

const DEFAULT_EMAIL: &str = "hello@example.com";

pub fn hero(b: &Block<'_>) -> Node {
    let d = b.data;
    el("div")
        .style(
            Style::new()
                .set("min-height", d.text("minHeight"))
                .raw("display: flex; align-items: center; justify-content: center")
                .set("text-align", d.text("textAlign"))
                .raw("padding: 4rem 2rem")
                .set("background", resolve_background(d))
                .set("color", d.text_or("textColor", TEXT_COLOR)),
        )
        .child(
            el("div")
                .style("max-width: 800px;")
                .child(
                    el("h1")
                        .style("font-size: 3rem; margin-bottom: 1rem;")
                        .text(d.text("title")),
                )
                .child(
                    el("p")
                        .style("font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.8;")
                        .text(d.text("subtitle")),
                )
                .child_opt(optional_button(d)),
        )
        .into()
}

pub fn text(b: &Block<'_>) -> Node {
    let d = b.data;
    el("div")
        .style(
            Style::new()
                .raw("padding: 4rem 2rem")
                .set("text-align", d.text("textAlign"))
                .set("background", d.text("backgroundColor")),
        )
        .child(
            container("800px")
                .child(
                    el("h2")
                        .style(
                            Style::new()
                                .set("font-size", d.text("headingSize"))
                                .raw("margin-bottom: 1rem"),
                        )
                        .text(d.text("heading")),
                )
                .child(
                    el("p")
                        .style(
                            Style::new()
                                .raw("font-size: 1.125rem; line-height: 1.7")
                                .set("color", MUTED_COLOR),
                        )
                        .text(d.text("content")),
                ),
        )
        .into()
}

pub fn image(b: &Block<'_>) -> Node {
    let d = b.data;
    let style = Style::new()
        .set("width", d.text("width"))
        .set("max-width", d.text("maxWidth"))
        .set("border-radius", d.text("borderRadius"))
        .raw("display: block");
    let style = match d.text("alignment").as_str() {
        "center" => style.raw("margin: 0 auto"),
        "right" => style.raw("margin-left: auto"),
        _ => style,
    };
    section(None)
        .child(
            el("img")
                .url("src", &d.text("src"))
                .attr("alt", d.text("alt"))
                .style(style),
        )
        .into()
}

pub fn cta(b: &Block<'_>) -> Node {
    let d = b.data;
    // The button text defaults to the gradient's first stop so it matches the background.
    let button_text_color = [d.text("buttonTextColor"), d.text("gradientStart")]
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or_else(|| BUTTON_COLOR.to_string());
    el("div")
        .style(
            Style::new()
                .raw("padding: 6rem 2rem")
                .set("background", resolve_background(d))
                .set("color", d.text_or("textColor", BUTTON_TEXT_COLOR))
                .raw("text-align: center"),
        )
        .child(
            container("800px")
                .child(
                    el("h2")
                        .style("font-size: 2.5rem; margin-bottom: 1rem;")
                        .text(d.text("heading")),
                )
                .child(
                    el("p")
                        .style("font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.9;")
                        .text(d.text("subtitle")),
                )
                .child(
                    el("a")
                        .url("href", &d.text("buttonUrl"))
                        .style(
                            Style::new()
                                .raw("display: inline-block; padding: 1rem 2.5rem")
                                .set("background", d.text_or("buttonColor", BUTTON_TEXT_COLOR))
                                .set("color", button_text_color)
                                .raw("text-decoration: none; border-radius: 0.5rem; font-weight: 700"),
                        )
                        .text(d.text("buttonText")),
                ),
        )
        .into()
}

pub fn contact(b: &Block<'_>) -> Node {
    let d = b.data;
    let email = d.text_or("email", DEFAULT_EMAIL);
    let field = "padding: 0.875rem; border: 2px solid #e2e8f0; border-radius: 0.5rem; font-size: 1rem;";
    section(Some(d.text("backgroundColor")))
        .child(
            container("600px")
                .child(heading(d.text("heading"), "1rem"))
                .child(
                    el("p")
                        .style("text-align: center; color: #64748b; margin-bottom: 2rem;")
                        .text(d.text("subtitle")),
                )
                .child(
                    el("form")
                        .style("display: flex; flex-direction: column; gap: 1rem;")
                        .url("action", &format!("mailto:{}", email))
                        .attr("method", "post")
                        .attr("enctype", "text/plain")
                        .child(
                            el("input")
                                .attr("type", "text")
                                .attr("name", "name")
                                .attr("placeholder", "Your Name")
                                .style(field),
                        )
                        .child(
                            el("input")
                                .attr("type", "email")
                                .attr("name", "email")
                                .attr("placeholder", "Your Email")
                                .style(field),
                        )
                        .child(
                            el("textarea")
                                .attr("name", "message")
                                .attr("placeholder", "Your Message")
                                .attr("rows", "5")
                                .style(format!("{} resize: vertical;", field)),
                        )
                        .child(
                            el("button")
                                .attr("type", "submit")
                                .style("padding: 1rem; background: #0066cc; color: white; border: none; border-radius: 0.5rem; font-weight: 600; cursor: pointer;")
                                .text("Send Message"),
                        ),
                )
                .child(
                    el("p")
                        .style("text-align: center; margin-top: 1rem; font-size: 0.875rem; color: #64748b;")
                        .text(format!("Sends to: {}", email)),
                ),
        )
        .into()
}

pub fn newsletter(b: &Block<'_>) -> Node {
    let d = b.data;
    el("div")
        .style(
            Style::new()
                .raw("padding: 6rem 2rem")
                .set("background", resolve_background(d))
                .raw("color: white; text-align: center"),
        )
        .child(
            container("600px")
                .child(
                    el("h2")
                        .style("font-size: 2.5rem; margin-bottom: 1rem;")
                        .text(d.text("heading")),
                )
                .child(
                    el("p")
                        .style("font-size: 1.125rem; margin-bottom: 2rem; opacity: 0.9;")
                        .text(d.text("subtitle")),
                )
                .child(
                    el("form")
                        .style("display: flex; gap: 1rem;")
                        .child(
                            el("input")
                                .attr("type", "email")
                                .attr("placeholder", "Enter your email")
                                .style("flex: 1; padding: 1rem; border: none; border-radius: 0.5rem; font-size: 1rem;"),
                        )
                        .child(
                            el("button")
                                .attr("type", "submit")
                                .style(
                                    Style::new()
                                        .raw("padding: 1rem 2rem; background: white")
                                        .set("color", d.text_or("gradientStart", BUTTON_COLOR))
                                        .raw("border: none; border-radius: 0.5rem; font-weight: 700; cursor: pointer"),
                                )
                                .text(d.text("buttonText")),
                        ),
                ),
        )
        .into()
}

/// `padding-bottom` that gives a responsive box the requested aspect ratio.
fn aspect_padding(ratio: &str) -> &'static str {
    match ratio {
        "16/9" => "56.25%",
        "4/3" => "75%",
        "1/1" => "100%",
        _ => "42.857%",
    }
}

pub fn video(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container(&d.text("maxWidth"))
                .child(heading(d.text("title"), "2rem"))
                .child(
                    el("div")
                        .style(
                            Style::new()
                                .raw("position: relative; width: 100%")
                                .set("padding-bottom", aspect_padding(&d.text("aspectRatio")))
                                .raw("border-radius: 1rem; overflow: hidden"),
                        )
                        .child(
                            el("iframe")
                                .url("src", &d.text("url"))
                                .style("position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: none;")
                                .flag("allowfullscreen"),
                        ),
                ),
        )
        .into()
}

pub fn footer(b: &Block<'_>) -> Node {
    let d = b.data;
    let brand = el("div")
        .child(
            el("h3")
                .style("font-size: 1.5rem; margin-bottom: 0.5rem; font-weight: 700;")
                .text(d.text("companyName")),
        )
        .child(
            el("p")
                .style("opacity: 0.7; margin-bottom: 1rem;")
                .text(d.text("tagline")),
        );
    let columns = b.items("columns").map(|col| {
        el("div")
            .child(
                el("h4")
                    .style("font-weight: 700; margin-bottom: 1rem;")
                    .text(col.text("title")),
            )
            .child(
                el("ul")
                    .style("list-style: none; padding: 0;")
                    .children(col.strings("links").into_iter().map(|link| {
                        el("li").style("margin-bottom: 0.5rem;").child(
                            el("a")
                                .attr("href", "#")
                                .style("color: white; opacity: 0.7; text-decoration: none;")
                                .text(link),
                        )
                    })),
            )
    });
    el("footer")
        .style("background: #1e293b; color: white; padding: 4rem 2rem 2rem;")
        .child(
            container("1200px")
                .child(
                    el("div")
                        .style("display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 3rem; margin-bottom: 3rem;")
                        .child(brand)
                        .children(columns),
                )
                .child(
                    el("div")
                        .style("border-top: 1px solid rgba(255,255,255,0.1); padding-top: 2rem; text-align: center; opacity: 0.7;")
                        .text(d.text("copyright")),
                ),
        )
        .into()
}

pub fn navbar(b: &Block<'_>) -> Node {
    let d = b.data;
    let links = d.strings("links").into_iter().map(|link| {
        el("a")
            .attr("href", "#")
            .style(Style::new().set("color", MUTED_COLOR).raw("text-decoration: none; font-weight: 500"))
            .text(link)
    });
    el("nav")
        .style(
            Style::new()
                .set("background", d.text("backgroundColor"))
                .raw("padding: 1rem 2rem; border-bottom: 1px solid #e2e8f0")
                .set_if(d.flag("sticky"), "position", "sticky")
                .set_if(d.flag("sticky"), "top", "0")
                .set_if(d.flag("sticky"), "z-index", "100")
                .raw("min-height: 60px"),
        )
        .child(
            el("div")
                .style("max-width: 1200px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center;")
                .child(
                    el("div")
                        .style("font-size: 1.5rem; font-weight: 700;")
                        .text(d.text("brand")),
                )
                .child(
                    el("div")
                        .style("display: flex; align-items: center; gap: 2rem;")
                        .children(links)
                        .child(
                            el("a")
                                .url("href", &d.text("ctaUrl"))
                                .style("padding: 0.5rem 1.5rem; background: #0066cc; color: white; text-decoration: none; border-radius: 0.5rem; font-weight: 600;")
                                .text(d.text("ctaText")),
                        ),
                ),
        )
        .into()
}

pub fn imagetext(b: &Block<'_>) -> Node {
    let d = b.data;
    let direction = if d.text("imagePosition") == "left" { "row" } else { "row-reverse" };
    section(Some(d.text("backgroundColor")))
        .child(
            el("div")
                .style(
                    Style::new()
                        .raw("max-width: 1000px; margin: 0 auto; display: flex")
                        .set("flex-direction", direction)
                        .raw("gap: 3rem; align-items: center"),
                )
                .child(
                    el("div").style("flex: 1;").child(
                        el("img")
                            .url("src", &d.text("image"))
                            .style("width: 100%; border-radius: 1rem;"),
                    ),
                )
                .child(
                    el("div")
                        .style(Style::new().raw("flex: 1").set("color", d.text_or("textColor", TEXT_COLOR)))
                        .child(
                            el("h2")
                                .style("font-size: 2rem; margin-bottom: 1rem;")
                                .text(d.text("heading")),
                        )
                        .child(
                            el("p")
                                .style("font-size: 1.125rem; line-height: 1.7; opacity: 0.8; margin-bottom: 1.5rem;")
                                .text(d.text("text")),
                        )
                        .child_opt(optional_button(d)),
                ),
        )
        .into()
}

pub fn callout(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            el("div")
                .style(
                    Style::new()
                        .raw("max-width: 800px; margin: 0 auto")
                        .set("background", d.text("backgroundColor"))
                        .set("border-left", format!("4px solid {}", d.text("borderColor")))
                        .raw("padding: 2rem; border-radius: 0.5rem"),
                )
                .child(
                    el("div")
                        .style("display: flex; gap: 1rem; align-items: start;")
                        .child(el("div").style("font-size: 2rem;").text(d.text("icon")))
                        .child(
                            el("div")
                                .style("flex: 1;")
                                .child(
                                    el("h3")
                                        .style("font-size: 1.25rem; margin-bottom: 0.5rem; font-weight: 700;")
                                        .text(d.text("heading")),
                                )
                                .child(el("p").style("line-height: 1.6;").text(d.text("text"))),
                        ),
                ),
        )
        .into()
}

pub fn map(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "1rem"))
                .child(
                    el("p")
                        .style("text-align: center; color: #64748b; margin-bottom: 2rem;")
                        .text(d.text("address")),
                )
                .child(
                    el("div")
                        .style("position: relative; width: 100%; height: 450px; border-radius: 1rem; overflow: hidden;")
                        .child(
                            el("iframe")
                                .url("src", &d.text("embedUrl"))
                                .style("width: 100%; height: 100%; border: none;")
                                .flag("allowfullscreen")
                                .attr("loading", "lazy"),
                        ),
                ),
        )
        .into()
}

/// Unit labels of the countdown, with the class the ticking script updates.
const COUNTDOWN_UNITS: [(&str, &str); 4] = [
    ("countdown-days", "Days"),
    ("countdown-hours", "Hours"),
    ("countdown-minutes", "Minutes"),
    ("countdown-seconds", "Seconds"),
];

pub fn countdown(b: &Block<'_>) -> Node {
    let d = b.data;
    let element_id = format!("countdown-{}", b.id);
    // Embedded as a JSON string literal so user data cannot break out of the script.
    let target = Value::String(format!("{}T{}", d.text("targetDate"), d.text("targetTime")));
    let script = format!(
        r#"(function() {{
    const targetDate = new Date({target}).getTime();
    const container = document.getElementById({id});
    if (!container) return;
    const pad = (n) => String(n).padStart(2, '0');
    const set = (cls, v) => {{ container.querySelector('.' + cls).textContent = v; }};
    function updateCountdown() {{
        const distance = targetDate - Date.now();
        if (!(distance >= 0)) {{
            ['countdown-days', 'countdown-hours', 'countdown-minutes', 'countdown-seconds'].forEach((c) => set(c, '00'));
            return;
        }}
        set('countdown-days', pad(Math.floor(distance / 86400000)));
        set('countdown-hours', pad(Math.floor((distance % 86400000) / 3600000)));
        set('countdown-minutes', pad(Math.floor((distance % 3600000) / 60000)));
        set('countdown-seconds', pad(Math.floor((distance % 60000) / 1000)));
    }}
    updateCountdown();
    setInterval(updateCountdown, 1000);
}})();"#,
        target = target,
        id = Value::String(element_id.clone()),
    );

    let units = COUNTDOWN_UNITS.iter().map(|(class, label)| {
        el("div")
            .style("background: rgba(255,255,255,0.1); padding: 2rem 1rem; border-radius: 1rem; backdrop-filter: blur(10px);")
            .child(
                el("div")
                    .class(*class)
                    .style("font-size: 3rem; font-weight: 800; margin-bottom: 0.5rem;")
                    .text("--"),
            )
            .child(
                el("div")
                    .style("font-size: 0.875rem; opacity: 0.8; text-transform: uppercase;")
                    .text(*label),
            )
    });

    let body = el("div")
        .style(
            Style::new()
                .raw("padding: 6rem 2rem")
                .set("background", d.text("backgroundColor"))
                .set("color", d.text("textColor"))
                .raw("text-align: center"),
        )
        .child(
            container("800px")
                .child(
                    el("h2")
                        .style("font-size: 2.5rem; margin-bottom: 0.5rem; font-weight: 800;")
                        .text(d.text("heading")),
                )
                .child(
                    el("p")
                        .style("font-size: 1.25rem; margin-bottom: 3rem; opacity: 0.9;")
                        .text(d.text("subtitle")),
                )
                .child(
                    el("div")
                        .attr("id", element_id)
                        .style("display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; max-width: 600px; margin: 0 auto;")
                        .children(units),
                ),
        );
    Node::Fragment(vec![body.into(), Node::Script(script)])
}

pub fn quote(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some(d.text("backgroundColor")))
        .child(
            el("div")
                .style("max-width: 800px; margin: 0 auto; text-align: center;")
                .child(
                    el("div")
                        .style("font-size: 4rem; color: #0066cc; margin-bottom: 1rem;")
                        .text("\""),
                )
                .child(
                    el("p")
                        .style(
                            Style::new()
                                .set("font-size", d.text("quoteSize"))
                                .raw("font-style: italic; line-height: 1.6; margin-bottom: 2rem"),
                        )
                        .text(d.text("quote")),
                )
                .child(
                    el("p")
                        .style("font-weight: 600; color: #64748b;")
                        .text(format!("\u{2014} {}", d.text("author"))),
                ),
        )
        .into()
}

pub fn banner(b: &Block<'_>) -> Node {
    let d = b.data;
    let background = d.text("backgroundColor");
    let button = optional_button_plain(b).map(|(label, url)| {
        el("a")
            .url("href", &url)
            .style(
                Style::new()
                    .raw("padding: 0.5rem 1.5rem; background: white")
                    .set("color", &background)
                    .raw("text-decoration: none; border-radius: 0.5rem; font-weight: 600"),
            )
            .text(label)
    });
    let dismiss = d.flag("dismissible").then(|| {
        el("button")
            .style("background: none; border: none; color: white; cursor: pointer; font-size: 1.5rem; margin-left: auto;")
            .attr("aria-label", "Dismiss")
            .text("\u{00d7}")
    });
    el("div")
        .style(
            Style::new()
                .raw("padding: 1rem 2rem")
                .set("background", &background)
                .set("color", d.text("textColor"))
                .raw("text-align: center; display: flex; align-items: center; justify-content: center; gap: 2rem; flex-wrap: wrap"),
        )
        .child(
            el("p")
                .style("font-weight: 600; margin: 0;")
                .text(d.text("text")),
        )
        .child_opt(button)
        .child_opt(dismiss)
        .into()
}

/// `(buttonText, buttonUrl)` when a button is configured.
fn optional_button_plain(b: &Block<'_>) -> Option<(String, String)> {
    let label = b.data.text("buttonText");
    (!label.is_empty()).then(|| (label, b.data.text("buttonUrl")))
}

pub fn columns(b: &Block<'_>) -> Node {
    let d = b.data;
    let count = d.text_or("columnCount", "1");
    section(Some(d.text("backgroundColor")))
        .child(
            container("1000px").child(
                el("div")
                    .style(
                        Style::new()
                            .raw("display: grid")
                            .set("grid-template-columns", format!("repeat({}, 1fr)", count))
                            .raw("gap: 2rem"),
                    )
                    .children(b.items("columns").map(|col| {
                        el("div")
                            .style("padding: 2rem; background: #f8fafc; border-radius: 0.5rem;")
                            .child(
                                el("p")
                                    .style("line-height: 1.7; color: #334155;")
                                    .text(col.text("content")),
                            )
                    })),
            ),
        )
        .into()
}

pub fn separator(b: &Block<'_>) -> Node {
    let d = b.data;
    el("div")
        .style(Style::new().set("padding", format!("{} 2rem", d.text("spacing"))))
        .child(
            container("1000px").child(
                el("hr").style(
                    Style::new()
                        .raw("border: none")
                        .set(
                            "border-top",
                            format!("{} {} {}", d.text("thickness"), d.text("style"), d.text("color")),
                        )
                        .set("width", d.text("width"))
                        .raw("margin: 0 auto"),
                ),
            ),
        )
        .into()
}

