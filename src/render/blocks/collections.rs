//! Templates built around a repeating list of items.

use super::{ACCENT_COLOR, Block, MUTED_COLOR, container, grid, heading, muted, section};
use crate::data::format_number;
use crate::markup::{Element, Node, Style, el};

/// Most stars a testimonial shows.
const MAX_RATING: f64 = 5.0;

/// White card with a soft shadow, used by several grids.
fn card(padding: &'static str) -> Element {
    el("div").style(
        Style::new()
            .raw("background: white")
            .set("padding", padding)
            .raw("border-radius: 1rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1)"),
    )
}

/// Gradient circle holding a short label (timeline years, step numbers).
fn badge(content: String, font_size: &'static str, margin: &'static str) -> Element {
    el("div")
        .style(
            Style::new()
                .raw("flex-shrink: 0; width: 80px; height: 80px; border-radius: 50%")
                .raw("background: linear-gradient(135deg, #667eea, #764ba2); color: white")
                .raw("display: flex; align-items: center; justify-content: center")
                .set("font-size", font_size)
                .raw("font-weight: 800")
                .set("margin", margin),
        )
        .text(content)
}

pub fn features(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some(d.text("backgroundColor")))
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("250px", "2rem").children(b.items("features").map(|f| {
                    el("div")
                        .style("text-align: center; padding: 2rem;")
                        .child(el("div").style("font-size: 3rem; margin-bottom: 1rem;").text(f.text("icon")))
                        .child(
                            el("h3")
                                .style("font-size: 1.25rem; margin-bottom: 0.5rem;")
                                .text(f.text("title")),
                        )
                        .child(el("p").style("color: #64748b;").text(f.text("description")))
                }))),
        )
        .into()
}

pub fn gallery(b: &Block<'_>) -> Node {
    let d = b.data;
    let columns = match d.text("columns").as_str() {
        "auto-fit" | "" => "repeat(auto-fit, minmax(250px, 1fr))".to_string(),
        n => format!("repeat({}, 1fr)", n),
    };
    let image_height = d.text("imageHeight");
    section(None)
        .child(
            container("1200px").child(
                el("div")
                    .style(
                        Style::new()
                            .raw("display: grid")
                            .set("grid-template-columns", columns)
                            .set("gap", d.text("gap")),
                    )
                    .children(d.strings("images").into_iter().map(|src| {
                        el("img").url("src", &src).style(
                            Style::new()
                                .raw("width: 100%")
                                .set("height", &image_height)
                                .raw("object-fit: cover; border-radius: 0.5rem"),
                        )
                    })),
            ),
        )
        .into()
}

pub fn team(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("250px", "2rem").children(b.items("members").map(|m| {
                    el("div")
                        .style("text-align: center;")
                        .child(
                            el("img")
                                .url("src", &m.text("image"))
                                .attr("alt", m.text("name"))
                                .style("width: 150px; height: 150px; border-radius: 50%; object-fit: cover; margin-bottom: 1rem;"),
                        )
                        .child(el("h3").style("font-size: 1.25rem; margin-bottom: 0.25rem;").text(m.text("name")))
                        .child(
                            el("p")
                                .style("color: #0066cc; font-weight: 600; margin-bottom: 0.5rem;")
                                .text(m.text("role")),
                        )
                        .child(el("p").style("color: #64748b; font-size: 0.9rem;").text(m.text("bio")))
                }))),
        )
        .into()
}

pub fn stats(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some(d.text("backgroundColor")))
        .child(
            container("1000px").child(
                grid("200px", "3rem")
                    .children(b.items("stats").map(|s| {
                        el("div")
                            .style("text-align: center;")
                            .child(
                                el("div")
                                    .style(
                                        Style::new()
                                            .raw("font-size: 3rem; font-weight: 800")
                                            .set("color", ACCENT_COLOR)
                                            .raw("margin-bottom: 0.5rem"),
                                    )
                                    .text(s.text("number")),
                            )
                            .child(el("div").style("color: #64748b; font-weight: 500;").text(s.text("label")))
                    })),
            ),
        )
        .into()
}

pub fn faq(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("800px")
                .child(heading(d.text("heading"), "3rem"))
                .children(b.items("faqs").map(|f| {
                    el("div")
                        .style("background: #f8fafc; padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 1rem;")
                        .child(
                            el("h3")
                                .style("font-size: 1.125rem; font-weight: 700; margin-bottom: 0.5rem;")
                                .text(f.text("question")),
                        )
                        .child(muted(f.text("answer")))
                })),
        )
        .into()
}

pub fn logos(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some("#f8fafc".to_string()))
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(
                    grid("150px", "2rem")
                        .children(d.strings("logos").into_iter().map(|src| {
                            el("img")
                                .url("src", &src)
                                .attr("alt", "")
                                .style("width: 100%; height: 60px; object-fit: contain; filter: grayscale(100%); opacity: 0.6; transition: all 0.3s;")
                        })),
                ),
        )
        .into()
}

pub fn timeline(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("800px")
                .child(heading(d.text("heading"), "3rem"))
                .children(b.items("events").map(|event| {
                    el("div")
                        .style("display: flex; gap: 2rem; margin-bottom: 2rem;")
                        .child(badge(event.text("year"), "1.25rem", "0"))
                        .child(
                            el("div")
                                .style("flex: 1; padding-top: 0.5rem;")
                                .child(
                                    el("h3")
                                        .style("font-size: 1.25rem; margin-bottom: 0.5rem; font-weight: 700;")
                                        .text(event.text("title")),
                                )
                                .child(muted(event.text("description"))),
                        )
                })),
        )
        .into()
}

pub fn blog(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("300px", "2rem").children(b.items("posts").map(|post| {
                    el("article")
                        .style("background: white; border-radius: 1rem; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); transition: transform 0.2s;")
                        .child(
                            el("img")
                                .url("src", &post.text("image"))
                                .attr("alt", post.text("title"))
                                .style("width: 100%; height: 200px; object-fit: cover;"),
                        )
                        .child(
                            el("div")
                                .style("padding: 1.5rem;")
                                .child(
                                    el("div")
                                        .style("display: flex; gap: 1rem; font-size: 0.875rem; color: #64748b; margin-bottom: 0.75rem;")
                                        .child(el("span").text(post.text("date")))
                                        .child(el("span").text("\u{2022}"))
                                        .child(el("span").text(post.text("readTime"))),
                                )
                                .child(
                                    el("h3")
                                        .style("font-size: 1.25rem; margin-bottom: 0.75rem;")
                                        .text(post.text("title")),
                                )
                                .child(
                                    el("p")
                                        .style("color: #64748b; margin-bottom: 1rem; line-height: 1.6;")
                                        .text(post.text("excerpt")),
                                )
                                .child(
                                    el("a")
                                        .url("href", &post.text("link"))
                                        .style("color: #0066cc; font-weight: 600; text-decoration: none;")
                                        .text("Read More \u{2192}"),
                                ),
                        )
                }))),
        )
        .into()
}

pub fn progress(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some("#f8fafc".to_string()))
        .child(
            container("800px")
                .child(heading(d.text("heading"), "3rem"))
                .children(b.items("skills").map(|skill| {
                    let pct = skill.number("percentage").unwrap_or(0.0).clamp(0.0, 100.0);
                    let pct = format_number(pct);
                    el("div")
                        .style("margin-bottom: 2rem;")
                        .child(
                            el("div")
                                .style("display: flex; justify-content: space-between; margin-bottom: 0.5rem;")
                                .child(el("span").style("font-weight: 600;").text(skill.text("name")))
                                .child(
                                    el("span")
                                        .style("color: #0066cc; font-weight: 600;")
                                        .text(format!("{}%", pct)),
                                ),
                        )
                        .child(
                            el("div")
                                .style("background: #e2e8f0; height: 12px; border-radius: 9999px; overflow: hidden;")
                                .child(
                                    el("div").style(
                                        Style::new()
                                            .raw("background: linear-gradient(90deg, #0066cc, #00a8ff); height: 100%")
                                            .set("width", format!("{}%", pct))
                                            .raw("border-radius: 9999px; transition: width 1s"),
                                    ),
                                ),
                        )
                })),
        )
        .into()
}

pub fn social(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            el("div")
                .style("max-width: 600px; margin: 0 auto; text-align: center;")
                .child(el("h2").style("font-size: 2rem; margin-bottom: 2rem;").text(d.text("heading")))
                .child(
                    el("div")
                        .style("display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap;")
                        .children(b.items("links").map(|link| {
                            el("a")
                                .url("href", &link.text("url"))
                                .attr("target", "_blank")
                                .attr("rel", "noopener")
                                .attr("title", link.text("platform"))
                                .style("display: flex; align-items: center; justify-content: center; width: 50px; height: 50px; background: #0066cc; color: white; text-decoration: none; border-radius: 50%; font-size: 1.25rem; font-weight: 700; transition: transform 0.2s;")
                                .text(link.text("icon"))
                        })),
                ),
        )
        .into()
}

pub fn testimonials(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some("#f8fafc".to_string()))
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("300px", "2rem").children(b.items("testimonials").map(|t| {
                    let stars = t.number("rating").unwrap_or(0.0).clamp(0.0, MAX_RATING) as usize;
                    card("2rem")
                        .child(el("div").style("margin-bottom: 1rem;").text("\u{2b50}".repeat(stars)))
                        .child(
                            el("p")
                                .style("font-style: italic; margin-bottom: 1rem;")
                                .text(format!("\"{}\"", t.text("text"))),
                        )
                        .child(el("p").style("font-weight: 600;").text(t.text("name")))
                        .child(el("p").style("font-size: 0.875rem; opacity: 0.7;").text(t.text("role")))
                }))),
        )
        .into()
}

pub fn pricing(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("250px", "2rem").children(b.items("plans").map(|plan| {
                    card("2rem")
                        .attr("data-plan", plan.text("name"))
                        .child(el("h3").style("font-size: 1.5rem; margin-bottom: 1rem; text-align: center;").text(plan.text("name")))
                        .child(
                            el("div")
                                .style("font-size: 2.5rem; font-weight: 800; margin-bottom: 1rem; text-align: center;")
                                .text(format!("${}", plan.text("price")))
                                .child(el("span").style("font-size: 1rem; font-weight: normal;").text("/mo")),
                        )
                        .child(
                            el("ul")
                                .style("list-style: none; margin-bottom: 2rem; text-align: left; padding: 0;")
                                .children(plan.strings("features").into_iter().map(|f| {
                                    el("li").style("padding: 0.5rem 0;").text(format!("\u{2713} {}", f))
                                })),
                        )
                        .child(
                            el("a")
                                .url("href", &plan.text("buttonUrl"))
                                .style("display: block; padding: 0.75rem; background: #0066cc; color: white; text-decoration: none; border-radius: 0.5rem; font-weight: 600; text-align: center;")
                                .text(plan.text("buttonText")),
                        )
                }))),
        )
        .into()
}

pub fn accordion(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("800px")
                .child(heading(d.text("heading"), "3rem"))
                .children(b.items("items").map(|item| {
                    el("div")
                        .style("background: white; border: 1px solid #e2e8f0; border-radius: 0.5rem; margin-bottom: 1rem; overflow: hidden;")
                        .child(
                            el("div")
                                .style("padding: 1.25rem; font-weight: 600; cursor: pointer; display: flex; justify-content: space-between; align-items: center;")
                                .child(el("span").text(item.text("title")))
                                .child(el("span").style("font-size: 1.5rem;").text("+")),
                        )
                        .child(
                            el("div")
                                .style("padding: 0 1.25rem 1.25rem; color: #64748b; line-height: 1.6;")
                                .text(item.text("content")),
                        )
                })),
        )
        .into()
}

pub fn tabs(b: &Block<'_>) -> Node {
    let first_content = b.items("tabs").next().map(|t| t.text("content")).unwrap_or_default();
    let buttons = b.items("tabs").enumerate().map(|(i, tab)| {
        let (color, border) = if i == 0 {
            (ACCENT_COLOR, ACCENT_COLOR)
        } else {
            (MUTED_COLOR, "transparent")
        };
        el("button")
            .style(
                Style::new()
                    .raw("padding: 1rem 0; border: none; background: none; font-weight: 600")
                    .set("color", color)
                    .set("border-bottom", format!("3px solid {}", border))
                    .raw("cursor: pointer"),
            )
            .text(tab.text("title"))
    });
    section(None)
        .child(
            container("800px")
                .child(
                    el("div")
                        .style("border-bottom: 2px solid #e2e8f0; margin-bottom: 2rem; display: flex; gap: 2rem;")
                        .children(buttons),
                )
                .child(
                    el("div")
                        .style("padding: 2rem; background: #f8fafc; border-radius: 0.5rem;")
                        .text(first_content),
                ),
        )
        .into()
}

pub fn cards(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some("#f8fafc".to_string()))
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("280px", "2rem").children(b.items("cards").map(|c| {
                    card("2.5rem")
                        .child(el("div").style("font-size: 3.5rem; margin-bottom: 1rem; text-align: center;").text(c.text("icon")))
                        .child(
                            el("h3")
                                .style("font-size: 1.5rem; margin-bottom: 1rem; font-weight: 700; text-align: center;")
                                .text(c.text("title")),
                        )
                        .child(muted(c.text("description")))
                }))),
        )
        .into()
}

pub fn steps(b: &Block<'_>) -> Node {
    let d = b.data;
    section(None)
        .child(
            container("1000px")
                .child(heading(d.text("heading"), "4rem"))
                .child(grid("250px", "3rem").children(b.items("steps").map(|step| {
                    el("div")
                        .style("text-align: center; position: relative;")
                        .child(badge(step.text("number"), "2rem", "0 auto 1.5rem"))
                        .child(
                            el("h3")
                                .style("font-size: 1.25rem; margin-bottom: 0.75rem; font-weight: 700;")
                                .text(step.text("title")),
                        )
                        .child(muted(step.text("description")))
                }))),
        )
        .into()
}

pub fn metrics(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some(d.text("backgroundColor")))
        .child(
            container("1000px").child(grid("200px", "3rem").children(b.items("metrics").map(|m| {
                el("div")
                    .style("text-align: center;")
                    .child(el("div").style("font-size: 3rem; margin-bottom: 0.5rem;").text(m.text("icon")))
                    .child(
                        el("div")
                            .style("font-size: 3rem; font-weight: 800; color: #0066cc; margin-bottom: 0.5rem;")
                            .text(m.text("number")),
                    )
                    .child(el("div").style("color: #64748b; font-weight: 500;").text(m.text("label")))
            }))),
        )
        .into()
}

pub fn portfolio(b: &Block<'_>) -> Node {
    let d = b.data;
    section(Some("#f8fafc".to_string()))
        .child(
            container("1200px")
                .child(heading(d.text("heading"), "3rem"))
                .child(grid("300px", "2rem").children(b.items("projects").map(|p| {
                    el("div")
                        .style("position: relative; overflow: hidden; border-radius: 1rem; cursor: pointer; aspect-ratio: 4/3;")
                        .child(
                            el("img")
                                .url("src", &p.text("image"))
                                .attr("alt", p.text("title"))
                                .style("width: 100%; height: 100%; object-fit: cover; transition: transform 0.3s;"),
                        )
                        .child(
                            el("div")
                                .style("position: absolute; bottom: 0; left: 0; right: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), transparent); padding: 2rem 1.5rem 1.5rem; color: white;")
                                .child(
                                    el("div")
                                        .style("font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.8; margin-bottom: 0.25rem;")
                                        .text(p.text("category")),
                                )
                                .child(el("h3").style("font-size: 1.25rem; font-weight: 700;").text(p.text("title"))),
                        )
                }))),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Data, Fields};
    use serde_json::json;

    fn render(f: fn(&Block<'_>) -> Node, value: serde_json::Value) -> Node {
        let data: Data = value.as_object().cloned().unwrap();
        f(&Block::new(1, Fields::new(&data)))
    }

    #[test]
    fn test_testimonial_stars_are_clamped() {
        let node = render(testimonials, json!({"testimonials": [{"rating": 50}, {"rating": -2}, {"rating": "3"}]}));
        let text = node.text_content();
        assert_eq!(text.matches('\u{2b50}').count(), 5 + 3);
    }

    #[test]
    fn test_tabs_without_items() {
        let node = render(tabs, json!({}));
        assert!(node.find_all("button").is_empty());
    }

    #[test]
    fn test_first_tab_is_active() {
        let node = render(
            tabs,
            json!({"tabs": [{"title": "A", "content": "first"}, {"title": "B", "content": "second"}]}),
        );
        let buttons = node.find_all("button");
        assert!(buttons[0].get_attr("style").unwrap().contains("color: #0066cc;"));
        assert!(buttons[1].get_attr("style").unwrap().contains("transparent"));
        let text = node.text_content();
        assert!(text.contains("first"));
        assert!(!text.contains("second"));
    }

    #[test]
    fn test_gallery_column_modes() {
        let node = render(gallery, json!({"columns": "3", "images": ["a.png"]}));
        assert!(node.to_html().contains("grid-template-columns: repeat(3, 1fr);"));
        let node = render(gallery, json!({"columns": "auto-fit"}));
        assert!(node.to_html().contains("repeat(auto-fit, minmax(250px, 1fr))"));
    }

    #[test]
    fn test_progress_width_is_clamped() {
        let node = render(progress, json!({"skills": [{"name": "X", "percentage": 140}]}));
        let html = node.to_html();
        assert!(html.contains("width: 100%;"));
        assert!(html.contains(">100%<"));
    }

    #[test]
    fn test_pricing_features_listed() {
        let node = render(
            pricing,
            json!({"plans": [{"name": "Pro", "price": "29", "features": ["A", "B"]}]}),
        );
        assert_eq!(node.find_all("li").len(), 2);
        assert!(node.text_content().contains("$29/mo"));
    }
}
