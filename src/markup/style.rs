//! Inline style builder.

use std::fmt;

/// An ordered list of CSS declarations for a `style` attribute.
///
/// Values pass through [`css_value`] so user data cannot close the declaration
/// and start a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl AsRef<str>) -> Self {
        self.decls.push((property.to_string(), css_value(value.as_ref())));
        self
    }

    /// Set a declaration only when `cond` holds.
    pub fn set_if(self, cond: bool, property: &'static str, value: impl AsRef<str>) -> Self {
        if cond { self.set(property, value) } else { self }
    }

    /// Append trusted, static declarations verbatim.
    pub fn raw(mut self, decls: &'static str) -> Self {
        for decl in decls.split(';') {
            if let Some((prop, value)) = decl.split_once(':') {
                let prop = prop.trim();
                if !prop.is_empty() {
                    self.decls.push((prop.to_string(), value.trim().to_string()));
                }
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in &self.decls {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", prop, value)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}

/// Strip characters that would let a value escape its CSS declaration.
pub fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_display() {
        let style = Style::new()
            .set("padding", "4rem 2rem")
            .set("background", "#fff");
        assert_eq!(style.to_string(), "padding: 4rem 2rem; background: #fff;");
    }

    #[test]
    fn test_raw_and_set_mix() {
        let style = Style::new()
            .raw("display: flex; gap: 1rem;")
            .set("color", "red");
        assert_eq!(style.to_string(), "display: flex; gap: 1rem; color: red;");
    }

    #[test]
    fn test_set_if() {
        let style = Style::new()
            .set_if(false, "position", "sticky")
            .set_if(true, "top", "0");
        assert_eq!(style.to_string(), "top: 0;");
    }

    #[test]
    fn test_css_value_blocks_declaration_injection() {
        assert_eq!(css_value("red; position: fixed"), "red position: fixed");
        assert_eq!(
            css_value("linear-gradient(135deg, #667eea, #764ba2)"),
            "linear-gradient(135deg, #667eea, #764ba2)"
        );
        assert_eq!(
            css_value("system-ui, -apple-system, sans-serif"),
            "system-ui, -apple-system, sans-serif"
        );
    }
}
