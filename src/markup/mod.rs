//! # Markup Tree
//!
//! A small typed HTML builder. Renderers assemble [`Node`] trees instead of
//! interpolating strings, so every piece of user-supplied text passes through
//! one escaping routine on its way out.
//!
//! ```
//! use tessera::markup::{el, text};
//!
//! let node = el("h2")
//!     .style("font-size: 2rem;")
//!     .child(text("Tom & Jerry <3"));
//! assert_eq!(
//!     node.to_html(),
//!     r#"<h2 style="font-size: 2rem;">Tom &amp; Jerry &lt;3</h2>"#
//! );
//! ```

mod style;

pub use style::{Style, css_value};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta"];

/// URL schemes that may execute script when followed.
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

// ============================================================================
// NODES
// ============================================================================

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Sibling nodes without a wrapper element.
    Fragment(Vec<Node>),
    /// An inline `<script>` body. `</` sequences are neutralised on output.
    Script(String),
    /// A comment, with `--` stripped on output.
    Comment(String),
}

/// An HTML or SVG element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Group nodes without introducing an element.
pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(nodes.into_iter().collect())
}

impl Element {
    /// Set an attribute. Values are escaped on output.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Set a URL-bearing attribute (`href`, `src`, `action`), neutralising unsafe schemes.
    pub fn url(self, name: &'static str, value: &str) -> Self {
        self.attr(name, safe_url(value))
    }

    /// Set a boolean attribute such as `allowfullscreen`.
    pub fn flag(self, name: &'static str) -> Self {
        self.attr(name, "")
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Set the inline style. Accepts a plain string or a [`Style`].
    pub fn style(self, value: impl Into<String>) -> Self {
        self.attr("style", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a child only when `node` is `Some`.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    /// Shorthand for a single text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.write_html(out),
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Node::Script(body) => {
                out.push_str("<script>");
                out.push_str(&body.replace("</", "<\\/"));
                out.push_str("</script>");
            }
            Node::Comment(body) => {
                out.push_str("<!-- ");
                out.push_str(&body.replace("--", ""));
                out.push_str(" -->");
            }
        }
    }

    /// Concatenated text content of this subtree (script and comments excluded).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(t) => out.push_str(t),
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_text(out)),
            Node::Script(_) | Node::Comment(_) => {}
        }
    }

    /// Depth-first search for every element with the given tag.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.tag == tag {
                found.push(e);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        match self {
            Node::Element(e) => {
                visit(e);
                e.children.iter().for_each(|c| c.walk(visit));
            }
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.walk(visit)),
            _ => {}
        }
    }
}

// ============================================================================
// ESCAPING
// ============================================================================

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace URLs with script-capable schemes by `#`.
///
/// `data:image/...` URLs are kept so inline images still work.
pub fn safe_url(url: &str) -> String {
    let normalized: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if normalized.starts_with("data:image/") && !normalized.starts_with("data:image/svg") {
        return url.trim().to_string();
    }
    if UNSAFE_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        return "#".to_string();
    }
    url.trim().to_string()
}
