//! Component registry: insertion-ordered entries plus an id index, kept in
//! one owned container so the two can never diverge.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::component::Component;

struct RegistryEntry {
    id: String,
    component: Arc<dyn Component>,
}

/// Insertion-ordered store of components with an id index.
#[derive(Default)]
pub struct ComponentRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("ids", &self.entries.iter().map(|e| &e.id).collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, keeping the first registration on id collision.
    ///
    /// Returns whether the component was actually inserted.
    pub fn insert(&mut self, component: Arc<dyn Component>) -> bool {
        let id = component.id().to_string();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(RegistryEntry { id, component });
        true
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Component>> {
        self.index.get(id).map(|&pos| &self.entries[pos].component)
    }

    /// Components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Arc<dyn Component>> {
        self.entries.iter().map(|entry| &entry.component)
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
