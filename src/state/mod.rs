//! Ordered state data model: attribute entries, resources, and the state map.
//!
//! A rendered script becomes a [`StateMap`]: an insertion-ordered mapping
//! from state identifier (see [`sid`]) to [`Resource`], where each resource
//! holds one or more module calls (`pkg.installed`, `file.managed`, …) and
//! each module call carries an ordered list of single-key [`Attr`] entries.
//! Iteration order is the order resources first appeared in the script and
//! is externally observable; it determines serialization order.

pub mod merge;
pub mod sid;

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An attribute value: string, boolean flag, or list of strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Plain string value (e.g., a path, mode, or user name).
    Str(String),
    /// Boolean flag (e.g., `save: true`).
    Bool(bool),
    /// List of strings (e.g., iptables `--match` modules).
    List(Vec<String>),
}

/// A single attribute entry: one key mapped to one value.
///
/// Serializes as a single-entry map, matching the Salt attribute shape
/// (`- name: bar`). Entries are ordered and duplicates are permitted
/// except where [`merge`] explicitly filters them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    /// Attribute key (e.g., `name`, `mode`, `save`).
    pub key: String,
    /// Attribute value.
    pub value: Value,
}

impl Attr {
    /// Build a string attribute.
    #[must_use]
    pub fn str(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: Value::Str(value.into()),
        }
    }

    /// Build a boolean flag attribute.
    #[must_use]
    pub fn flag(key: &str, value: bool) -> Self {
        Self {
            key: key.to_string(),
            value: Value::Bool(value),
        }
    }

    /// Build a list attribute.
    #[must_use]
    pub fn list(key: &str, values: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            value: Value::List(values),
        }
    }
}

impl Serialize for Attr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// The declarative module calls applied to one resource, in insertion order.
///
/// A resource usually carries a single module (`pkg.installed` with a
/// `name` attribute), but merging can stack several modules under one
/// identifier (e.g., `service.running` and `service.enabled` for the same
/// service). The module count is small, so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    modules: Vec<(String, Vec<Attr>)>,
}

impl Resource {
    /// Create a resource with a single module call.
    #[must_use]
    pub fn single(module: &str, attrs: Vec<Attr>) -> Self {
        Self {
            modules: vec![(module.to_string(), attrs)],
        }
    }

    /// `true` if the resource already carries a call to `module`.
    #[must_use]
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|(name, _)| name == module)
    }

    /// The attribute list for `module`, if present.
    #[must_use]
    pub fn module(&self, module: &str) -> Option<&[Attr]> {
        self.modules
            .iter()
            .find(|(name, _)| name == module)
            .map(|(_, attrs)| attrs.as_slice())
    }

    /// Mutable attribute list for `module`, if present.
    pub fn module_mut(&mut self, module: &str) -> Option<&mut Vec<Attr>> {
        self.modules
            .iter_mut()
            .find(|(name, _)| name == module)
            .map(|(_, attrs)| attrs)
    }

    /// Append a new module call at the end of the resource.
    pub fn push_module(&mut self, module: String, attrs: Vec<Attr>) {
        self.modules.push((module, attrs));
    }

    /// Iterate `(module name, attribute list)` pairs in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &[Attr])> {
        self.modules
            .iter()
            .map(|(name, attrs)| (name.as_str(), attrs.as_slice()))
    }

    /// Consume the resource into its module calls, in insertion order.
    pub(crate) fn into_modules(self) -> impl Iterator<Item = (String, Vec<Attr>)> {
        self.modules.into_iter()
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modules.len()))?;
        for (name, attrs) in &self.modules {
            map.serialize_entry(name, attrs)?;
        }
        map.end()
    }
}

/// Insertion-ordered mapping from state identifier to [`Resource`].
///
/// Plain hash maps do not guarantee iteration order, so the map keeps a
/// parallel key list for ordering alongside a [`HashMap`] for O(1)
/// lookup. Interpreters build small `StateMap` fragments per script line;
/// [`merge::merge`] folds them into the accumulated result.
#[derive(Debug, Clone, Default)]
pub struct StateMap {
    order: Vec<String>,
    entries: HashMap<String, Resource>,
}

impl StateMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the map holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of resources in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// The resource under `sid`, if present.
    #[must_use]
    pub fn get(&self, sid: &str) -> Option<&Resource> {
        self.entries.get(sid)
    }

    /// Mutable resource under `sid`, if present.
    pub fn get_mut(&mut self, sid: &str) -> Option<&mut Resource> {
        self.entries.get_mut(sid)
    }

    /// Insert or replace the resource under `sid`.
    ///
    /// A new identifier is appended at the end of the iteration order; an
    /// existing one keeps its position.
    pub fn insert(&mut self, sid: String, resource: Resource) {
        if !self.entries.contains_key(&sid) {
            self.order.push(sid.clone());
        }
        self.entries.insert(sid, resource);
    }

    /// Shorthand: insert a resource carrying one module call.
    pub fn insert_module(&mut self, sid: String, module: &str, attrs: Vec<Attr>) {
        self.insert(sid, Resource::single(module, attrs));
    }

    /// Iterate `(identifier, resource)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.order
            .iter()
            .filter_map(|sid| self.entries.get(sid).map(|r| (sid.as_str(), r)))
    }

    /// Iterate identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl IntoIterator for StateMap {
    type Item = (String, Resource);
    type IntoIter = std::vec::IntoIter<(String, Resource)>;

    /// Consume the map into `(identifier, resource)` pairs in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        let Self { order, mut entries } = self;
        order
            .into_iter()
            .filter_map(|sid| entries.remove(&sid).map(|r| (sid, r)))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl PartialEq for StateMap {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateMap {}

impl Serialize for StateMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (sid, resource) in self.iter() {
            map.serialize_entry(sid, resource)?;
        }
        map.end()
    }
}
