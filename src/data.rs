//! # Component Data Access
//!
//! Component data is an untyped JSON object so it round-trips through
//! persistence unchanged. [`Fields`] is a read-only view over that object with
//! forgiving accessors: a missing or mistyped field yields an empty value or the
//! caller's fallback, never an error. Templates and forms read data only
//! through this view, which is what keeps every renderer total.

use serde_json::{Map, Value};

/// The data blob of a component instance.
pub type Data = Map<String, Value>;

/// Read-only, forgiving view over a component's data.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Data,
}

static EMPTY: std::sync::LazyLock<Data> = std::sync::LazyLock::new(Data::new);

impl<'a> Fields<'a> {
    pub fn new(map: &'a Data) -> Self {
        Self { map }
    }

    /// View a nested value. Non-object values give an empty view.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self { map },
            _ => Self { map: &EMPTY },
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Field as display text. Missing and null fields are empty.
    pub fn text(&self, key: &str) -> String {
        self.map.get(key).map(value_text).unwrap_or_default()
    }

    /// Field as display text, or `fallback` when it is missing or empty.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        let value = self.text(key);
        if value.is_empty() { fallback.to_string() } else { value }
    }

    /// Truthiness of a field: `true`, non-empty strings, and non-zero numbers.
    pub fn flag(&self, key: &str) -> bool {
        match self.map.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            _ => false,
        }
    }

    /// Numeric field. Numeric strings are accepted.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.map.get(key).and_then(value_number)
    }

    /// List field. Missing and non-list fields are empty.
    pub fn list(&self, key: &str) -> &'a [Value] {
        match self.map.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// List of strings, with non-string entries stringified.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.list(key).iter().map(value_text).collect()
    }

    pub fn raw(&self) -> &'a Data {
        self.map
    }
}

/// Display text for a JSON value.
///
/// Strings are returned as-is, numbers use [`format_number`], and null
/// becomes empty. Lists join their items with commas.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_default(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => String::new(),
    }
}

/// Numeric reading of a JSON value. Non-finite results are rejected.
pub fn value_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Format a number the way it is shown to users: integers without a decimal
/// point, everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value == 0.0 {
        // normalises -0
        return "0".to_string();
    }
    format!("{}", value)
}

/// Leading integer of a CSS length such as `"400px"`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits_end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..digits_end].parse().ok()
}
