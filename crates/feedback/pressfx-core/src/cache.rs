//! Original-color cache: the bind-time snapshot used as the return-to
//! baseline. Cleared and fully rebuilt on each bind/rebind; restore writes
//! back through the host and silently skips elements that no longer exist.

use hashbrown::HashMap;

use crate::binding::{BoundSet, ElementHandle, SceneHost};
use crate::value::Color;

#[derive(Clone, Debug, Default)]
pub struct ColorCache {
    originals: HashMap<ElementHandle, Color>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the prior cache, then record the current color of every bound
    /// element as its original. First write wins per element within one
    /// capture pass; elements the host can no longer resolve are skipped.
    pub fn capture(&mut self, bound: &BoundSet, host: &dyn SceneHost) {
        self.originals.clear();
        for elem in bound.iter() {
            if self.originals.contains_key(elem) {
                continue;
            }
            if let Some(color) = host.color(elem) {
                self.originals.insert(elem.clone(), color);
            }
        }
    }

    /// Write every cached original color back to its element, skipping
    /// elements that have since become invalid.
    pub fn restore(&self, host: &mut dyn SceneHost) {
        for (elem, color) in self.originals.iter() {
            let _ = host.set_color(elem, *color);
        }
    }

    /// The cached original color for an element, if it was captured.
    pub fn original(&self, elem: &str) -> Option<Color> {
        self.originals.get(elem).copied()
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }
}
