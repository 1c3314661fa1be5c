//! # Properties-Schema Generator
//!
//! Builds the editable form for one component instance, and turns what the
//! user types back into document edits.
//!
//! A [`FormSchema`] is an ordered list of [`FormItem`]s: plain fields, and
//! sections for the repeating lists a type owns. Every field carries the live
//! value from the instance data, so a form regenerated after an edit always
//! shows the edit.
//!
//! ## Edits
//!
//! A form never mutates anything itself. [`Field::edit`] converts raw input
//! into a [`FieldEdit`], and [`FieldEdit::apply`] performs it on a
//! [`Document`]. The mutation controller is the only caller of `apply` in the
//! editor.
//!
//! ## Comma lists
//!
//! Some lists are edited as one comma-joined text box (navbar links, plan
//! features, chart labels and values). The document always stores a real
//! list; joining and splitting happen here only.

pub mod forms;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{ComponentKind, items::MIN_ITEMS, list_spec};
use crate::data::{Fields, value_text};
use crate::document::{ComponentInstance, Document, FieldPath};
use crate::error::TesseraError;

// ============================================================================
// SCHEMA TYPES
// ============================================================================

/// The form for one component instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub id: u64,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
    pub items: Vec<FormItem>,
}

impl FormSchema {
    /// Every field in form order, including those inside list sections.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.items.iter().flat_map(|item| {
            let (field, section) = match item {
                FormItem::Field(field) => (Some(field), None),
                FormItem::List(section) => (None, Some(section)),
            };
            field
                .into_iter()
                .chain(section.into_iter().flat_map(|s| s.items.iter().flat_map(|i| i.fields.iter())))
        })
    }

    /// Find a field by the path it edits.
    pub fn field(&self, path: &str) -> Option<&Field> {
        self.fields().find(|f| f.binding.path() == Some(path))
    }

    /// Find the section for a repeating list.
    pub fn section(&self, list: &str) -> Option<&ListSection> {
        self.items.iter().find_map(|item| match item {
            FormItem::List(section) if section.list == list => Some(section),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum FormItem {
    Field(Field),
    List(ListSection),
}

impl From<Field> for FormItem {
    fn from(field: Field) -> Self {
        FormItem::Field(field)
    }
}

/// One editable input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: String,
    pub binding: Binding,
    pub kind: FieldKind,
    /// The live value. Comma lists hold their joined text.
    pub value: Value,
}

/// What a field writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "bind", rename_all = "snake_case")]
pub enum Binding {
    /// A field path inside the instance data.
    Path { path: String },
    /// The columns component's column count, which also resizes its columns.
    ColumnCount,
}

impl Binding {
    pub fn path(&self) -> Option<&str> {
        match self {
            Binding::Path { path } => Some(path),
            Binding::ColumnCount => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Color,
    Select {
        options: Vec<SelectOption>,
        /// Store the chosen value as a number rather than a string.
        numeric: bool,
    },
    Number,
    Checkbox,
    /// Image upload. The uploaded URL is written to the field's path.
    File,
    Date,
    Time,
    CommaList {
        numeric: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A repeating list with its per-item field groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection {
    pub list: &'static str,
    pub title: &'static str,
    pub item_label: &'static str,
    pub items: Vec<ListItem>,
    /// Appends the list's default item.
    pub add: FieldEdit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub index: usize,
    pub fields: Vec<Field>,
    /// Removes this item. `None` when the list is at its minimum length.
    pub remove: Option<FieldEdit>,
}

// ============================================================================
// EDITS
// ============================================================================

/// A change requested through a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldEdit {
    Set { path: String, value: Value },
    SetCommaList { path: String, raw: String, numeric: bool },
    AppendItem { list: String },
    RemoveItem { list: String, index: usize },
    SetColumnCount { count: usize },
}

impl FieldEdit {
    /// Apply this edit to instance `id`. On error the document is unchanged.
    pub fn apply(&self, document: &mut Document, id: u64) -> Result<(), TesseraError> {
        match self {
            FieldEdit::Set { path, value } => document.patch_field(id, path, value.clone()),
            FieldEdit::SetCommaList { path, raw, numeric } => {
                document.patch_field(id, path, comma_list_value(raw, *numeric))
            }
            FieldEdit::AppendItem { list } => document.append_default_item(id, list).map(drop),
            FieldEdit::RemoveItem { list, index } => document.remove_item(id, list, *index).map(drop),
            FieldEdit::SetColumnCount { count } => document.set_column_count(id, *count),
        }
    }
}

impl Field {
    /// The edit produced by entering `input` into this field.
    ///
    /// Returns `None` for file fields, whose value arrives through an upload,
    /// and for a column count that is not a number.
    pub fn edit(&self, input: &str) -> Option<FieldEdit> {
        let path = match &self.binding {
            Binding::ColumnCount => {
                return input.trim().parse().ok().map(|count| FieldEdit::SetColumnCount { count });
            }
            Binding::Path { path } => path.clone(),
        };
        let value = match &self.kind {
            FieldKind::File => return None,
            FieldKind::CommaList { numeric } => {
                return Some(FieldEdit::SetCommaList {
                    path,
                    raw: input.to_string(),
                    numeric: *numeric,
                });
            }
            FieldKind::Checkbox => Value::Bool(matches!(input.trim(), "true" | "on" | "1")),
            FieldKind::Number | FieldKind::Select { numeric: true, .. } => {
                number_value(parse_number(input))
            }
            _ => Value::String(input.to_string()),
        };
        Some(FieldEdit::Set { path, value })
    }
}

// ============================================================================
// COMMA LISTS
// ============================================================================

/// Split comma-joined text into trimmed, non-empty entries.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split comma-joined numbers. Entries that are not numbers become 0.
pub fn split_numeric_list(raw: &str) -> Vec<f64> {
    split_comma_list(raw).iter().map(|s| parse_number(s)).collect()
}

/// Join a stored list for display in a comma-list field.
pub fn join_comma_list(items: &[Value]) -> String {
    items.iter().map(value_text).collect::<Vec<_>>().join(", ")
}

/// The stored form of comma-joined input.
pub fn comma_list_value(raw: &str, numeric: bool) -> Value {
    if numeric {
        Value::Array(split_numeric_list(raw).into_iter().map(number_value).collect())
    } else {
        Value::Array(split_comma_list(raw).into_iter().map(Value::String).collect())
    }
}

fn parse_number(input: &str) -> f64 {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// A JSON number, stored as an integer when it has no fractional part.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// The form for an instance, or `None` when its type is not registered.
pub fn form_for(instance: &ComponentInstance) -> Option<FormSchema> {
    let kind = instance.kind()?;
    Some(FormSchema {
        id: instance.id,
        type_name: kind.type_name(),
        label: kind.label(),
        items: (kind.form_fn())(instance.fields()),
    })
}

/// Field builder over one level of component data.
///
/// At the top level paths are plain keys. Inside a list item they are
/// prefixed with the item's position, e.g. `plans[1].price`.
#[derive(Clone, Copy)]
pub(crate) struct Scope<'a> {
    data: Fields<'a>,
    item: Option<(&'static str, usize)>,
}

impl<'a> Scope<'a> {
    pub(crate) fn root(data: Fields<'a>) -> Self {
        Self { data, item: None }
    }

    fn path(&self, key: &str) -> String {
        match self.item {
            Some((list, index)) => FieldPath::item_field(list, index, key),
            None => key.to_string(),
        }
    }

    fn field(&self, label: &str, key: &str, kind: FieldKind) -> Field {
        Field {
            label: label.to_string(),
            binding: Binding::Path { path: self.path(key) },
            kind,
            value: self.data.get(key).cloned().unwrap_or(Value::Null),
        }
    }

    pub(crate) fn text(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Text)
    }

    pub(crate) fn long_text(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::LongText)
    }

    pub(crate) fn email(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Email)
    }

    pub(crate) fn color(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Color)
    }

    pub(crate) fn number(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Number)
    }

    pub(crate) fn checkbox(&self, label: &str, key: &str) -> Field {
        let mut field = self.field(label, key, FieldKind::Checkbox);
        field.value = Value::Bool(self.data.flag(key));
        field
    }

    pub(crate) fn date(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Date)
    }

    pub(crate) fn time(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::Time)
    }

    pub(crate) fn file(&self, label: &str, key: &str) -> Field {
        self.field(label, key, FieldKind::File)
    }

    /// A select whose options are `(value, label)` pairs.
    pub(crate) fn select(&self, label: &str, key: &str, options: &[(&str, &str)]) -> Field {
        let kind = FieldKind::Select {
            options: select_options(&self.data.text(key), options),
            numeric: false,
        };
        self.field(label, key, kind)
    }

    /// A select storing its value as a number.
    pub(crate) fn numeric_select(&self, label: &str, key: &str, options: &[(&str, &str)]) -> Field {
        let kind = FieldKind::Select {
            options: select_options(&self.data.text(key), options),
            numeric: true,
        };
        self.field(label, key, kind)
    }

    pub(crate) fn comma_list(&self, label: &str, key: &str, numeric: bool) -> Field {
        let mut field = self.field(label, key, FieldKind::CommaList { numeric });
        field.value = Value::String(join_comma_list(self.data.list(key)));
        field
    }
}

fn select_options(live: &str, options: &[(&str, &str)]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: *value == live,
        })
        .collect()
}

/// A field bound to a scalar list entry, such as `images[2]`.
pub(crate) fn scalar_item(label: &str, list: &'static str, index: usize, value: &Value, kind: FieldKind) -> Field {
    Field {
        label: label.to_string(),
        binding: Binding::Path {
            path: FieldPath::item(list, index),
        },
        kind,
        value: value.clone(),
    }
}

/// A field writing the column count of a columns component.
pub(crate) fn column_count(label: &str, live: &str, options: &[(&str, &str)]) -> Field {
    Field {
        label: label.to_string(),
        binding: Binding::ColumnCount,
        kind: FieldKind::Select {
            options: select_options(live, options),
            numeric: true,
        },
        value: Value::String(live.to_string()),
    }
}

/// The section for one of `kind`'s repeating lists. `fields` builds the
/// group for each item from its scope and raw value.
pub(crate) fn section<F>(kind: ComponentKind, list: &'static str, data: Fields<'_>, fields: F) -> FormItem
where
    F: Fn(Scope<'_>, &Value) -> Vec<Field>,
{
    let (title, item_label) = list_spec(kind, list).map_or((list, list), |s| (s.title, s.item_label));
    let values = data.list(list);
    let removable = values.len() > MIN_ITEMS;
    let items = values
        .iter()
        .enumerate()
        .map(|(index, value)| ListItem {
            index,
            fields: fields(
                Scope {
                    data: Fields::of(value),
                    item: Some((list, index)),
                },
                value,
            ),
            remove: removable.then(|| FieldEdit::RemoveItem {
                list: list.to_string(),
                index,
            }),
        })
        .collect();
    FormItem::List(ListSection {
        list,
        title,
        item_label,
        items,
        add: FieldEdit::AppendItem { list: list.to_string() },
    })
}
