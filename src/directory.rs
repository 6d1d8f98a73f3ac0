//! Name-keyed lookup of grasp targets.
//!
//! Hosts that track objects in a scene graph expose them through
//! [`ObjectDirectory`]; [`ObjectRegistry`] is a plain in-memory version.

use crate::error::{GraspError, Result};
use crate::types::{BoxDimensions, OrientedBox};
use std::collections::HashMap;

/// A named box-shaped object that can be picked up.
#[derive(Debug, Clone)]
pub struct TargetObject {
    pub name: String,
    pub bbox: OrientedBox,
}

impl TargetObject {
    pub fn new(name: impl Into<String>, bbox: OrientedBox) -> Self {
        Self {
            name: name.into(),
            bbox,
        }
    }

    pub fn dimensions(&self) -> BoxDimensions {
        self.bbox.dimensions
    }
}

pub trait ObjectDirectory {
    fn lookup(&self, name: &str) -> Option<TargetObject>;
}

/// Look up `name` and return its box dimensions.
pub fn lookup_dimensions<D: ObjectDirectory + ?Sized>(
    directory: &D,
    name: &str,
) -> Result<BoxDimensions> {
    directory
        .lookup(name)
        .map(|object| object.dimensions())
        .ok_or_else(|| GraspError::NotFound(name.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: HashMap<String, TargetObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object, returning the one it replaced.
    pub fn insert(&mut self, object: TargetObject) -> Option<TargetObject> {
        self.objects.insert(object.name.clone(), object)
    }

    pub fn remove(&mut self, name: &str) -> Option<TargetObject> {
        self.objects.remove(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.objects.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ObjectDirectory for ObjectRegistry {
    fn lookup(&self, name: &str) -> Option<TargetObject> {
        self.objects.get(name).cloned()
    }
}

impl FromIterator<TargetObject> for ObjectRegistry {
    fn from_iter<I: IntoIterator<Item = TargetObject>>(iter: I) -> Self {
        let mut registry = Self::new();
        for object in iter {
            registry.insert(object);
        }
        registry
    }
}
