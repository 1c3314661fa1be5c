//! # Document Model
//!
//! A page is an ordered list of component instances plus the id of the
//! instance currently selected in the editor.
//!
//! ## Invariants
//!
//! - Instance ids are unique within a document.
//! - `selected_id`, when set, names an existing instance.
//! - Instances render top to bottom in list order.
//! - No more than `max_components` instances can be added.
//!
//! Every mutating operation is all-or-nothing: when it returns an error the
//! document is exactly as it was before the call.
//!
//! ## Example
//!
//! ```
//! use tessera::document::{Direction, Document};
//!
//! let mut doc = Document::new(10);
//! let hero = doc.add_instance("hero")?;
//! let text = doc.add_instance("text")?;
//! doc.move_instance(text, Direction::Up);
//! assert_eq!(doc.instances()[0].id, text);
//! doc.patch_field(hero, "title", "Hello".into())?;
//! # Ok::<(), tessera::TesseraError>(())
//! ```

mod path;

pub use path::{FieldPath, Segment};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashSet;
use tracing::warn;

use crate::catalog::{self, ComponentKind, items::MIN_ITEMS};
use crate::data::{Data, Fields};
use crate::error::TesseraError;

/// Column counts offered by the columns component.
pub const COLUMN_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=4;

/// Content of a column added when the column count grows.
const NEW_COLUMN_CONTENT: &str = "Column content here";

// ============================================================================
// INSTANCES
// ============================================================================

/// One component placed on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: u64,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub data: Data,
}

impl ComponentInstance {
    /// The registered kind, or `None` for a type this build does not know.
    pub fn kind(&self) -> Option<ComponentKind> {
        ComponentKind::parse(&self.type_name)
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.data)
    }
}

/// Direction for [`Document::move_instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// An ordered list of component instances and the editor's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    instances: Vec<ComponentInstance>,
    selected_id: Option<u64>,
    max_components: usize,
    next_id: u64,
}

impl Document {
    /// An empty document that accepts up to `max_components` instances.
    pub fn new(max_components: usize) -> Self {
        Self {
            instances: Vec::new(),
            selected_id: None,
            max_components,
            next_id: 1,
        }
    }

    /// Build a document from loaded instances.
    ///
    /// Ids are kept as loaded, and new ids continue after the largest one. A
    /// repeated id (only possible in hand-edited data) is replaced by a fresh
    /// id so the uniqueness invariant holds. Documents loaded above the limit
    /// keep every instance but accept no more. When the loaded ids leave no
    /// room above the largest one, every instance is renumbered from 1 in
    /// document order.
    pub fn from_instances(instances: Vec<ComponentInstance>, max_components: usize) -> Self {
        let max_id = instances.iter().map(|c| c.id).max().unwrap_or(0);
        // Room for one fresh id per instance plus the next added one.
        if max_id.checked_add(instances.len() as u64 + 1).is_none() {
            warn!(max_id, "component ids exhausted, renumbering");
            let mut document = Self {
                instances,
                selected_id: None,
                max_components,
                next_id: 1,
            };
            document.renumber();
            return document;
        }
        let mut next_id = max_id + 1;
        let mut seen = HashSet::new();
        let instances = instances
            .into_iter()
            .map(|mut inst| {
                if !seen.insert(inst.id) {
                    warn!(id = inst.id, new_id = next_id, "duplicate component id reassigned");
                    inst.id = next_id;
                    seen.insert(next_id);
                    next_id += 1;
                }
                inst
            })
            .collect();
        Self {
            instances,
            selected_id: None,
            max_components,
            next_id,
        }
    }

    /// Number the instances 1, 2, 3, ... in document order, keeping the
    /// selection on the same instance.
    fn renumber(&mut self) {
        let selected = self
            .selected_id
            .and_then(|id| self.instances.iter().position(|c| c.id == id));
        for (instance, id) in self.instances.iter_mut().zip(1u64..) {
            instance.id = id;
        }
        self.selected_id = selected.map(|index| index as u64 + 1);
        self.next_id = self.instances.len() as u64 + 1;
    }

    pub fn instances(&self) -> &[ComponentInstance] {
        &self.instances
    }

    pub fn into_instances(self) -> Vec<ComponentInstance> {
        self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn max_components(&self) -> usize {
        self.max_components
    }

    /// Change the plan limit. Existing instances are never dropped.
    pub fn set_max_components(&mut self, max_components: usize) {
        self.max_components = max_components;
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&ComponentInstance> {
        self.selected_id.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: u64) -> Option<&ComponentInstance> {
        self.instances.iter().find(|c| c.id == id)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.instances.iter().position(|c| c.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut ComponentInstance, TesseraError> {
        self.instances
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TesseraError::NotFound(id))
    }

    // ========================================================================
    // INSTANCE OPERATIONS
    // ========================================================================

    /// Append a new instance of `type_name`, cloned from its template.
    ///
    /// Returns the new instance's id. The selection is left unchanged.
    pub fn add_instance(&mut self, type_name: &str) -> Result<u64, TesseraError> {
        if self.instances.len() >= self.max_components {
            return Err(TesseraError::LimitExceeded {
                limit: self.max_components,
            });
        }
        let template = catalog::template(type_name)
            .ok_or_else(|| TesseraError::UnknownComponentType(type_name.to_string()))?;

        if self.next_id == u64::MAX {
            warn!("component ids exhausted, renumbering");
            self.renumber();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.instances.push(ComponentInstance {
            id,
            type_name: template.type_name,
            data: template.data,
        });
        Ok(id)
    }

    /// Swap an instance with its neighbour.
    ///
    /// Returns `false` without changing anything when the instance is already
    /// at that edge or does not exist.
    pub fn move_instance(&mut self, id: u64, direction: Direction) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.instances.len() => index + 1,
            _ => return false,
        };
        self.instances.swap(index, target);
        true
    }

    /// Remove an instance, clearing the selection if it was selected.
    pub fn remove_instance(&mut self, id: u64) -> Option<ComponentInstance> {
        let index = self.position(id)?;
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        Some(self.instances.remove(index))
    }

    /// Remove every instance.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.selected_id = None;
    }

    /// Select an instance, or clear the selection with `None`.
    ///
    /// Selecting an id that is not in the document is ignored and returns `false`.
    pub fn select(&mut self, id: Option<u64>) -> bool {
        match id {
            Some(id) if self.get(id).is_none() => false,
            _ => {
                self.selected_id = id;
                true
            }
        }
    }

    // ========================================================================
    // FIELD OPERATIONS
    // ========================================================================

    /// Set a field inside an instance's data.
    pub fn patch_field(&mut self, id: u64, path: &str, value: Value) -> Result<(), TesseraError> {
        let path: FieldPath = path.parse()?;
        self.update_data(id, |data| path.set(data, value))
    }

    /// Append `item` to the list at `list`. Returns the new length.
    ///
    /// A missing list is created.
    pub fn append_item(&mut self, id: u64, list: &str, item: Value) -> Result<usize, TesseraError> {
        let path: FieldPath = list.parse()?;
        self.update_data(id, |data| {
            if path.get(data).is_none_or(Value::is_null) {
                path.set(data, json!([]))?;
            }
            let items = list_mut(&path, data)?;
            items.push(item);
            Ok(items.len())
        })
    }

    /// Append the catalog's default item for `list`. Returns the new length.
    pub fn append_default_item(&mut self, id: u64, list: &str) -> Result<usize, TesseraError> {
        let instance = self.get(id).ok_or(TesseraError::NotFound(id))?;
        let kind = instance
            .kind()
            .ok_or_else(|| TesseraError::UnknownComponentType(instance.type_name.clone()))?;
        let item = catalog::default_item(kind, list, instance.fields()).ok_or_else(|| {
            TesseraError::InvalidFieldPath(format!(
                "{} has no list named '{}'",
                kind.type_name(),
                list
            ))
        })?;
        self.append_item(id, list, item)
    }

    /// Remove the item at `index` from the list at `list`.
    ///
    /// Refuses to empty a list: the last item can only be edited.
    pub fn remove_item(&mut self, id: u64, list: &str, index: usize) -> Result<Value, TesseraError> {
        let path: FieldPath = list.parse()?;
        self.update_data(id, |data| {
            let items = list_mut(&path, data)?;
            if index >= items.len() {
                return Err(TesseraError::InvalidFieldPath(format!(
                    "{}[{}] out of range (length {})",
                    path,
                    index,
                    items.len()
                )));
            }
            if items.len() <= MIN_ITEMS {
                return Err(TesseraError::MinimumItemCountViolation {
                    list: path.to_string(),
                });
            }
            Ok(items.remove(index))
        })
    }

    /// Resize a columns component, adding placeholder columns or dropping
    /// trailing ones, and store the new count.
    pub fn set_column_count(&mut self, id: u64, count: usize) -> Result<(), TesseraError> {
        if !COLUMN_COUNT_RANGE.contains(&count) {
            return Err(TesseraError::InvalidFieldPath(format!(
                "column count {} outside {}..={}",
                count,
                COLUMN_COUNT_RANGE.start(),
                COLUMN_COUNT_RANGE.end()
            )));
        }
        self.update_data(id, |data| {
            let mut columns = match data.get("columns") {
                Some(Value::Array(items)) => items.clone(),
                _ => Vec::new(),
            };
            columns.resize_with(count, || json!({ "content": NEW_COLUMN_CONTENT }));
            data.insert("columns".into(), Value::Array(columns));
            data.insert("columnCount".into(), json!(count));
            Ok(())
        })
    }

    /// Apply `f` to a copy of an instance's data and commit it only on success.
    fn update_data<T>(
        &mut self,
        id: u64,
        f: impl FnOnce(&mut Data) -> Result<T, TesseraError>,
    ) -> Result<T, TesseraError> {
        let instance = self.get_mut(id)?;
        let mut data = instance.data.clone();
        let out = f(&mut data)?;
        instance.data = data;
        Ok(out)
    }
}

fn list_mut<'a>(path: &FieldPath, data: &'a mut Data) -> Result<&'a mut Vec<Value>, TesseraError> {
    path.get_mut(data)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| TesseraError::InvalidFieldPath(format!("{} is not a list", path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(types: &[&str]) -> (Document, Vec<u64>) {
        let mut doc = Document::new(10);
        let ids = types.iter().map(|t| doc.add_instance(t).unwrap()).collect();
        (doc, ids)
    }

    fn order(doc: &Document) -> Vec<u64> {
        doc.instances().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_add_clones_template() {
        let (doc, ids) = doc_with(&["hero"]);
        let hero = doc.get(ids[0]).unwrap();
        assert_eq!(hero.type_name, "hero");
        assert_eq!(hero.data, catalog::template("hero").unwrap().data);
        assert_eq!(doc.selected_id(), None);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let (doc, ids) = doc_with(&["hero", "text", "hero"]);
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(order(&doc), ids);
    }

    #[test]
    fn test_add_unknown_type() {
        let mut doc = Document::new(10);
        let err = doc.add_instance("carousel").unwrap_err();
        assert!(matches!(err, TesseraError::UnknownComponentType(t) if t == "carousel"));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_add_beyond_limit() {
        let mut doc = Document::new(2);
        doc.add_instance("hero").unwrap();
        doc.add_instance("text").unwrap();
        let err = doc.add_instance("cta").unwrap_err();
        assert!(matches!(err, TesseraError::LimitExceeded { limit: 2 }));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_limit_checked_before_type() {
        let mut doc = Document::new(0);
        let err = doc.add_instance("carousel").unwrap_err();
        assert!(matches!(err, TesseraError::LimitExceeded { .. }));
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let (mut doc, ids) = doc_with(&["hero", "text", "cta"]);
        assert!(doc.move_instance(ids[1], Direction::Up));
        assert_eq!(order(&doc), vec![ids[1], ids[0], ids[2]]);
        assert!(doc.move_instance(ids[1], Direction::Down));
        assert_eq!(order(&doc), ids);
    }

    #[test]
    fn test_move_at_boundary_is_noop() {
        let (mut doc, ids) = doc_with(&["hero", "text"]);
        assert!(!doc.move_instance(ids[0], Direction::Up));
        assert!(!doc.move_instance(ids[1], Direction::Down));
        assert!(!doc.move_instance(99, Direction::Up));
        assert_eq!(order(&doc), ids);
    }

    #[test]
    fn test_move_preserves_data() {
        let (mut doc, ids) = doc_with(&["hero", "text"]);
        doc.patch_field(ids[0], "title", json!("Mine")).unwrap();
        doc.move_instance(ids[0], Direction::Down);
        assert_eq!(doc.instances()[1].data["title"], "Mine");
        assert_eq!(doc.instances()[1].id, ids[0]);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let (mut doc, ids) = doc_with(&["hero", "text"]);
        assert!(doc.select(Some(ids[1])));
        assert!(doc.remove_instance(ids[1]).is_some());
        assert_eq!(doc.selected_id(), None);
        assert_eq!(order(&doc), vec![ids[0]]);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let (mut doc, ids) = doc_with(&["hero", "text"]);
        doc.select(Some(ids[0]));
        doc.remove_instance(ids[1]);
        assert_eq!(doc.selected_id(), Some(ids[0]));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut doc, _) = doc_with(&["hero"]);
        assert!(doc.remove_instance(42).is_none());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let (mut doc, ids) = doc_with(&["hero"]);
        doc.select(Some(ids[0]));
        assert!(!doc.select(Some(77)));
        assert_eq!(doc.selected_id(), Some(ids[0]));
        assert!(doc.select(None));
        assert_eq!(doc.selected_id(), None);
    }

    #[test]
    fn test_patch_nested_field() {
        let (mut doc, ids) = doc_with(&["features"]);
        doc.patch_field(ids[0], "features[2].title", json!("Adaptive"))
            .unwrap();
        let data = &doc.get(ids[0]).unwrap().data;
        assert_eq!(data["features"][2]["title"], "Adaptive");
        assert_eq!(data["features"][2]["icon"], "📱");
        assert_eq!(data["heading"], "Our Features");
    }

    #[test]
    fn test_patch_failure_leaves_document_untouched() {
        let (mut doc, ids) = doc_with(&["features"]);
        let before = doc.clone();
        assert!(doc.patch_field(ids[0], "features[9].title", json!("x")).is_err());
        assert!(doc.patch_field(ids[0], "heading.inner.deep", json!("x")).is_err());
        assert!(doc.patch_field(ids[0], "bad path", json!("x")).is_err());
        assert!(matches!(
            doc.patch_field(99, "heading", json!("x")),
            Err(TesseraError::NotFound(99))
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_append_and_remove_items() {
        let (mut doc, ids) = doc_with(&["features"]);
        let len = doc.append_default_item(ids[0], "features").unwrap();
        assert_eq!(len, 4);
        assert_eq!(doc.get(ids[0]).unwrap().data["features"][3]["title"], "New Feature");

        let removed = doc.remove_item(ids[0], "features", 0).unwrap();
        assert_eq!(removed["title"], "Fast");
        assert_eq!(doc.get(ids[0]).unwrap().data["features"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_remove_last_item_is_refused() {
        let (mut doc, ids) = doc_with(&["tabs"]);
        doc.remove_item(ids[0], "tabs", 0).unwrap();
        doc.remove_item(ids[0], "tabs", 0).unwrap();
        let before = doc.clone();
        let err = doc.remove_item(ids[0], "tabs", 0).unwrap_err();
        assert!(matches!(err, TesseraError::MinimumItemCountViolation { list } if list == "tabs"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let (mut doc, ids) = doc_with(&["tabs"]);
        assert!(matches!(
            doc.remove_item(ids[0], "tabs", 5),
            Err(TesseraError::InvalidFieldPath(_))
        ));
    }

    #[test]
    fn test_append_to_missing_list_creates_it() {
        let (mut doc, ids) = doc_with(&["text"]);
        let len = doc.append_item(ids[0], "notes", json!("first")).unwrap();
        assert_eq!(len, 1);
        assert_eq!(doc.get(ids[0]).unwrap().data["notes"], json!(["first"]));
    }

    #[test]
    fn test_append_default_to_unowned_list() {
        let (mut doc, ids) = doc_with(&["hero"]);
        assert!(matches!(
            doc.append_default_item(ids[0], "features"),
            Err(TesseraError::InvalidFieldPath(_))
        ));
    }

    #[test]
    fn test_nested_list_append() {
        let (mut doc, ids) = doc_with(&["footer"]);
        doc.append_item(ids[0], "columns[0].links", json!("Roadmap"))
            .unwrap();
        assert_eq!(
            doc.get(ids[0]).unwrap().data["columns"][0]["links"],
            json!(["Features", "Pricing", "Security", "Roadmap"])
        );
    }

    #[test]
    fn test_set_column_count_grows_and_truncates() {
        let (mut doc, ids) = doc_with(&["columns"]);
        doc.set_column_count(ids[0], 4).unwrap();
        let data = &doc.get(ids[0]).unwrap().data;
        assert_eq!(data["columnCount"], 4);
        assert_eq!(data["columns"].as_array().unwrap().len(), 4);
        assert_eq!(data["columns"][3]["content"], "Column content here");
        assert_eq!(
            data["columns"][0]["content"],
            "This is the first column content. You can add any text here."
        );

        doc.set_column_count(ids[0], 1).unwrap();
        let data = &doc.get(ids[0]).unwrap().data;
        assert_eq!(data["columns"].as_array().unwrap().len(), 1);
        assert_eq!(data["columnCount"], 1);
    }

    #[test]
    fn test_set_column_count_bounds() {
        let (mut doc, ids) = doc_with(&["columns"]);
        assert!(doc.set_column_count(ids[0], 0).is_err());
        assert!(doc.set_column_count(ids[0], 5).is_err());
    }

    #[test]
    fn test_from_instances_continues_ids() {
        let instances = vec![
            ComponentInstance {
                id: 1700000000000,
                type_name: "hero".into(),
                data: Data::new(),
            },
            ComponentInstance {
                id: 5,
                type_name: "text".into(),
                data: Data::new(),
            },
        ];
        let mut doc = Document::from_instances(instances, 10);
        let id = doc.add_instance("cta").unwrap();
        assert_eq!(id, 1700000000001);
    }

    #[test]
    fn test_from_instances_repairs_duplicate_ids() {
        let instance = ComponentInstance {
            id: 3,
            type_name: "text".into(),
            data: Data::new(),
        };
        let doc = Document::from_instances(vec![instance.clone(), instance], 10);
        assert_eq!(order(&doc), vec![3, 4]);
    }

    #[test]
    fn test_from_instances_renumbers_when_ids_exhausted() {
        let instances = vec![
            ComponentInstance {
                id: 9,
                type_name: "hero".into(),
                data: Data::new(),
            },
            ComponentInstance {
                id: u64::MAX,
                type_name: "text".into(),
                data: Data::new(),
            },
            ComponentInstance {
                id: u64::MAX,
                type_name: "cta".into(),
                data: Data::new(),
            },
        ];
        let mut doc = Document::from_instances(instances, 10);
        assert_eq!(order(&doc), vec![1, 2, 3]);
        assert_eq!(doc.instances()[1].type_name, "text");
        assert_eq!(doc.add_instance("footer").unwrap(), 4);
    }

    #[test]
    fn test_add_renumbers_at_last_id() {
        let instances = vec![ComponentInstance {
            id: u64::MAX - 2,
            type_name: "hero".into(),
            data: Data::new(),
        }];
        let mut doc = Document::from_instances(instances, 10);
        let text = doc.add_instance("text").unwrap();
        assert_eq!(text, u64::MAX - 1);
        assert!(doc.select(Some(text)));

        let cta = doc.add_instance("cta").unwrap();
        assert_eq!(order(&doc), vec![1, 2, 3]);
        assert_eq!(cta, 3);
        assert_eq!(doc.selected_id(), Some(2));
    }

    #[test]
    fn test_instance_serde_shape() {
        let json = r#"{"id": 7, "type": "text", "data": {"heading": "Hi"}}"#;
        let inst: ComponentInstance = serde_json::from_str(json).unwrap();
        assert_eq!(inst.id, 7);
        assert_eq!(inst.type_name, "text");
        assert_eq!(inst.kind(), Some(ComponentKind::Text));
        let back = serde_json::to_value(&inst).unwrap();
        assert_eq!(back["type"], "text");
    }
}
