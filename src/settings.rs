//! Page-wide settings: title and theme.
//!
//! Settings live beside the component list and are persisted as their own
//! JSON string. Every field has a default so partial or older settings load.

use serde::{Deserialize, Serialize};

use crate::markup::css_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default = "default_primary")]
    pub primary_color: String,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_text")]
    pub text_color: String,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_title() -> String {
    "My Website".to_string()
}

fn default_primary() -> String {
    "#0066cc".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_text() -> String {
    "#1a1a1a".to_string()
}

fn default_font() -> String {
    "system-ui, -apple-system, sans-serif".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: Theme::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: default_primary(),
            background_color: default_background(),
            text_color: default_text(),
            font: default_font(),
        }
    }
}

impl Theme {
    /// Stylesheet for an exported page.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: {font}; color: {text}; background: {background}; }}
.container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}
.section {{ padding: 4rem 2rem; }}
h1 {{ font-size: 3rem; margin-bottom: 1rem; font-weight: 800; }}
h2 {{ font-size: 2rem; margin-bottom: 1rem; font-weight: 700; }}
h3 {{ font-size: 1.5rem; margin-bottom: 0.75rem; font-weight: 600; }}
p {{ font-size: 1.125rem; line-height: 1.6; }}
.button {{ display: inline-block; padding: 0.75rem 2rem; background: {primary}; color: white; text-decoration: none; border-radius: 0.5rem; font-weight: 600; transition: transform 0.2s; }}
.button:hover {{ transform: translateY(-2px); }}
img {{ max-width: 100%; height: auto; }}
input, textarea {{ font-family: inherit; }}
@media (max-width: 768px) {{
  .container {{ padding: 1rem; }}
  .section {{ padding: 2rem 1rem; }}
  h1 {{ font-size: 2rem; }}
  h2 {{ font-size: 1.5rem; }}
}}
"#,
            font = css_value(&self.font),
            text = css_value(&self.text_color),
            background = css_value(&self.background_color),
            primary = css_value(&self.primary_color),
        )
    }
}
