//! Field paths into component data.
//!
//! A path names a value inside a component's data blob:
//!
//! | Path | Addresses |
//! |------|-----------|
//! | `title` | top-level field |
//! | `features[2].title` | field of a list item |
//! | `images[0]` | scalar list item |
//! | `columns[1].links` | list nested in a list item |

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::data::Data;
use crate::error::TesseraError;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Path of a field inside a list item, e.g. `features[2].title`.
    pub fn item_field(list: &str, index: usize, key: &str) -> String {
        format!("{}[{}].{}", list, index, key)
    }

    /// Path of a scalar list item, e.g. `images[0]`.
    pub fn item(list: &str, index: usize) -> String {
        format!("{}[{}]", list, index)
    }

    /// Read the addressed value.
    pub fn get<'a>(&self, data: &'a Data) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = match first {
            Segment::Key(k) => data.get(k)?,
            Segment::Index(_) => return None,
        };
        for segment in rest {
            current = match segment {
                Segment::Key(k) => current.as_object()?.get(k)?,
                Segment::Index(i) => current.as_array()?.get(*i)?,
            };
        }
        Some(current)
    }

    /// Mutable access to the addressed value.
    pub fn get_mut<'a>(&self, data: &'a mut Data) -> Option<&'a mut Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = match first {
            Segment::Key(k) => data.get_mut(k)?,
            Segment::Index(_) => return None,
        };
        for segment in rest {
            current = match segment {
                Segment::Key(k) => current.as_object_mut()?.get_mut(k)?,
                Segment::Index(i) => current.as_array_mut()?.get_mut(*i)?,
            };
        }
        Some(current)
    }

    /// Write `value` at this path.
    ///
    /// Missing intermediate objects are created. List indices must already
    /// exist. On error `data` may be partially modified, so callers that need
    /// atomicity apply the write to a copy.
    pub fn set(&self, data: &mut Data, value: Value) -> Result<(), TesseraError> {
        let mut root = Value::Object(std::mem::take(data));
        let result = set_in(&mut root, &self.segments, value, self);
        if let Value::Object(map) = root {
            *data = map;
        }
        result
    }
}

fn set_in(
    target: &mut Value,
    segments: &[Segment],
    value: Value,
    path: &FieldPath,
) -> Result<(), TesseraError> {
    let Some((first, rest)) = segments.split_first() else {
        *target = value;
        return Ok(());
    };

    match first {
        Segment::Key(key) => {
            if target.is_null() {
                *target = Value::Object(Map::new());
            }
            let object = target.as_object_mut().ok_or_else(|| {
                TesseraError::InvalidFieldPath(format!("{}: '{}' is not inside an object", path, key))
            })?;
            if rest.is_empty() {
                object.insert(key.clone(), value);
                return Ok(());
            }
            let child = object.entry(key.clone()).or_insert(Value::Null);
            set_in(child, rest, value, path)
        }
        Segment::Index(index) => {
            let list = target.as_array_mut().ok_or_else(|| {
                TesseraError::InvalidFieldPath(format!("{}: index {} applied to a non-list", path, index))
            })?;
            let len = list.len();
            let slot = list.get_mut(*index).ok_or_else(|| {
                TesseraError::InvalidFieldPath(format!(
                    "{}: index {} out of range (length {})",
                    path, index, len
                ))
            })?;
            set_in(slot, rest, value, path)
        }
    }
}

impl FromStr for FieldPath {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| TesseraError::InvalidFieldPath(format!("'{}': {}", s, why));
        let mut segments = Vec::new();
        let mut chars = s.chars().peekable();
        let mut expect_key = true;

        while let Some(&c) = chars.peek() {
            match c {
                '[' => {
                    if segments.is_empty() {
                        return Err(invalid("path must start with a field name"));
                    }
                    chars.next();
                    let mut digits = String::new();
                    while let Some(&d) = chars.peek() {
                        if d == ']' {
                            break;
                        }
                        digits.push(d);
                        chars.next();
                    }
                    if chars.next() != Some(']') {
                        return Err(invalid("unclosed '['"));
                    }
                    let index = digits
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| invalid("list index must be a non-negative integer"))?;
                    segments.push(Segment::Index(index));
                    expect_key = false;
                }
                '.' => {
                    if segments.is_empty() || expect_key {
                        return Err(invalid("empty field name"));
                    }
                    chars.next();
                    expect_key = true;
                }
                _ => {
                    if !expect_key {
                        return Err(invalid("expected '.' or '[' after list index"));
                    }
                    let mut key = String::new();
                    while let Some(&k) = chars.peek() {
                        if k == '.' || k == '[' {
                            break;
                        }
                        if !(k.is_ascii_alphanumeric() || k == '_' || k == '-') {
                            return Err(invalid("field names use letters, digits, '_' and '-'"));
                        }
                        key.push(k);
                        chars.next();
                    }
                    segments.push(Segment::Key(key));
                    expect_key = false;
                }
            }
        }

        if segments.is_empty() || expect_key {
            return Err(invalid("empty path"));
        }
        Ok(FieldPath { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(k) if i == 0 => write!(f, "{}", k)?,
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(n) => write!(f, "[{}]", n)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Data {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_forms() {
        let path: FieldPath = "features[2].title".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("features".into()),
                Segment::Index(2),
                Segment::Key("title".into())
            ]
        );
        assert_eq!(path.to_string(), "features[2].title");

        let path: FieldPath = "images[0]".parse().unwrap();
        assert_eq!(path.segments().len(), 2);

        let path: FieldPath = "columns[1].links".parse().unwrap();
        assert_eq!(path.to_string(), "columns[1].links");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "[0]", "a..b", "a.", "a[x]", "a[1", "a[1]b", "a b", "a[-1]"] {
            assert!(bad.parse::<FieldPath>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_set_nested_preserves_siblings() {
        let mut d = data(json!({
            "heading": "H",
            "features": [
                {"icon": "a", "title": "A"},
                {"icon": "b", "title": "B"}
            ]
        }));
        let path: FieldPath = "features[1].title".parse().unwrap();
        path.set(&mut d, json!("Changed")).unwrap();
        assert_eq!(d["features"][1]["title"], "Changed");
        assert_eq!(d["features"][1]["icon"], "b");
        assert_eq!(d["features"][0]["title"], "A");
        assert_eq!(d["heading"], "H");
    }

    #[test]
    fn test_set_replaces_whole_list() {
        let mut d = data(json!({"links": ["a", "b"]}));
        let path: FieldPath = "links".parse().unwrap();
        path.set(&mut d, json!(["x", "y", "z"])).unwrap();
        assert_eq!(d["links"], json!(["x", "y", "z"]));
    }

    #[test]
    fn test_set_creates_missing_objects() {
        let mut d = Data::new();
        let path: FieldPath = "theme.primary".parse().unwrap();
        path.set(&mut d, json!("#000")).unwrap();
        assert_eq!(d["theme"]["primary"], "#000");
    }

    #[test]
    fn test_set_index_out_of_range() {
        let mut d = data(json!({"images": ["a"]}));
        let path: FieldPath = "images[3]".parse().unwrap();
        let err = path.set(&mut d, json!("b")).unwrap_err();
        assert!(matches!(err, TesseraError::InvalidFieldPath(_)));
        assert_eq!(d["images"], json!(["a"]));
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let mut d = data(json!({"title": "x"}));
        let path: FieldPath = "title.inner".parse().unwrap();
        assert!(path.set(&mut d, json!(1)).is_err());
    }

    #[test]
    fn test_get() {
        let d = data(json!({"plans": [{"features": ["a", "b"]}]}));
        let path: FieldPath = "plans[0].features[1]".parse().unwrap();
        assert_eq!(path.get(&d), Some(&json!("b")));
        let missing: FieldPath = "plans[4]".parse().unwrap();
        assert_eq!(missing.get(&d), None);
    }
}
