//! Surface state and the registry that tracks it.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{pointer, value};

/// One independently addressable UI document.
///
/// A surface exists from the moment any message references its id and
/// accumulates component and data updates; `root` and `is_live` stay unset
/// until a `beginRendering` directive arrives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub components: HashMap<String, Value>,
    pub data: Value,
    pub root: Option<String>,
    pub is_live: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            components: HashMap::new(),
            data: Value::Object(Map::new()),
            root: None,
            is_live: false,
        }
    }
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the data model's top-level `key` wholesale (no deep merge).
    pub fn set_data(&mut self, key: String, value: Value) {
        if let Value::Object(map) = &mut self.data {
            map.insert(key, value);
        }
    }

    /// Read the data-model value at a pointer path.
    pub fn read_data(&self, path: &str) -> Option<&Value> {
        pointer::read(path, &self.data)
    }

    /// Write a data-model value at a pointer path.
    pub fn write_data(&mut self, path: &str, value: Value) {
        pointer::write(path, value, &mut self.data);
    }

    /// Resolve a possibly-bound component property against this surface's
    /// data model.
    pub fn resolve(&self, bound: &Value) -> Option<Value> {
        value::resolve_bound(bound, &self.data)
    }
}

/// Process-lifetime registry of surfaces, keyed by surface id.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, surface_id: &str) -> Option<&Surface> {
        self.surfaces.get(surface_id)
    }

    pub fn get_mut(&mut self, surface_id: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(surface_id)
    }

    /// First-reference-creates: fetch a surface, adding a default empty one
    /// if this id has not been seen before.
    pub fn get_or_create(&mut self, surface_id: &str) -> &mut Surface {
        self.surfaces.entry(surface_id.to_string()).or_default()
    }

    /// Remove a surface. Absent ids come back as `None`.
    pub fn remove(&mut self, surface_id: &str) -> Option<Surface> {
        self.surfaces.remove(surface_id)
    }

    pub fn contains(&self, surface_id: &str) -> bool {
        self.surfaces.contains_key(surface_id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Surface)> {
        self.surfaces.iter()
    }
}
