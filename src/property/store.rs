//! PropertyStore: a component's attribute map, plus the uniform attribute contract.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::property::error::PropertyError;
use crate::property::value::{PropertyValue, RawValue};

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// The attribute contract every component exposes.
///
/// `set` coerces the raw value for the attribute's family and commits it only
/// on success; on failure the previous value stays in place. Setting
/// [`RawValue::Null`] (or a value that resolves to nothing, such as an empty
/// listener list) removes the attribute.
pub trait Properties {
    /// The stored value of an attribute.
    fn get(&self, tag: &str) -> Option<PropertyValue>;

    /// Coerce and store a value.
    fn set(&self, tag: &str, value: RawValue) -> Result<(), PropertyError>;

    /// Remove an attribute. Removing an absent attribute is a no-op.
    fn remove(&self, tag: &str);

    /// Remove every attribute.
    fn clear(&self);

    /// Names of the attributes currently set, sorted.
    fn all_tags(&self) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// PropertyStore
// ---------------------------------------------------------------------------

/// Case-insensitive map from attribute name to canonical value.
///
/// Each operation is atomic on its own; the underlying map is never handed out.
/// The `*_raw` variants skip case folding for callers that already hold a
/// canonical key.
#[derive(Debug, Default)]
pub struct PropertyStore {
    entries: RwLock<HashMap<String, PropertyValue>>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> Option<PropertyValue> {
        self.get_raw(&tag.to_ascii_lowercase())
    }

    /// Store `value` under `tag`; `None` removes the entry.
    pub fn set(&self, tag: &str, value: Option<PropertyValue>) {
        self.set_raw(tag.to_ascii_lowercase(), value);
    }

    pub fn remove(&self, tag: &str) {
        self.remove_raw(&tag.to_ascii_lowercase());
    }

    pub fn get_raw(&self, tag: &str) -> Option<PropertyValue> {
        self.entries.read().get(tag).cloned()
    }

    pub fn set_raw(&self, tag: String, value: Option<PropertyValue>) {
        let mut entries = self.entries.write();
        match value {
            Some(value) => {
                entries.insert(tag, value);
            }
            None => {
                entries.remove(&tag);
            }
        }
    }

    pub fn remove_raw(&self, tag: &str) {
        self.entries.write().remove(tag);
    }

    /// Whether an attribute is set.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.read().contains_key(&tag.to_ascii_lowercase())
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Sorted names of every stored attribute.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.entries.read().keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
