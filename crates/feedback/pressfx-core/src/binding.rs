//! Scene host trait, opaque handles, and bound-set discovery.
//!
//! Handles are small string keys resolved by the host at each access; the
//! core never assumes an element or target is still alive. The bound sets
//! are rebuilt by an explicit bind/rebind call, never incrementally.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::value::{Color, Scale};

/// Opaque handle for a color-bearing visual element (small string key).
pub type ElementHandle = String;

/// Opaque handle for a transform-like object (small string key).
pub type TargetHandle = String;

/// Capability class of a color-bearing visual element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum VisualClass {
    Image,
    Text,
}

/// Host-side access to the scene subtree under the component.
///
/// Adapters implement this over their scene graph and pass it into
/// [`Engine::bind`](crate::Engine::bind) and
/// [`Engine::update`](crate::Engine::update). Lookups by handle return
/// `None`/`false` when the referenced object no longer exists; the core
/// degrades silently in that case.
pub trait SceneHost {
    /// Enumerate the color-bearing elements of `class` under the component,
    /// including inactive members. Only live elements are returned.
    fn visuals(&mut self, class: VisualClass) -> Vec<ElementHandle>;

    /// Current color of an element, or `None` if it no longer exists.
    fn color(&self, elem: &ElementHandle) -> Option<Color>;

    /// Write an element's color; returns false if it no longer exists.
    fn set_color(&mut self, elem: &ElementHandle, color: Color) -> bool;

    /// Current scale of a target, or `None` if it no longer exists.
    fn scale(&self, target: &TargetHandle) -> Option<Scale>;

    /// Write a target's scale; returns false if it no longer exists.
    fn set_scale(&mut self, target: &TargetHandle, scale: Scale) -> bool;

    /// The component's own transform, used when no override is configured.
    fn default_target(&self) -> Option<TargetHandle>;
}

/// The filtered element sets this component animates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundSet {
    pub images: Vec<ElementHandle>,
    pub texts: Vec<ElementHandle>,
}

impl BoundSet {
    /// Discover both capability classes under the host, append configured
    /// extras, drop duplicates by handle identity (first occurrence wins),
    /// and remove anything present in the exclude lists. Excludes win over
    /// includes. Idempotent for an unchanged subtree.
    pub fn discover(host: &mut dyn SceneHost, cfg: &Config) -> Self {
        Self {
            images: collect(
                host,
                VisualClass::Image,
                &cfg.include_images,
                &cfg.exclude_images,
            ),
            texts: collect(
                host,
                VisualClass::Text,
                &cfg.include_texts,
                &cfg.exclude_texts,
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.texts.len()
    }

    /// Images first, then texts. No ordering requirement beyond stability.
    pub fn iter(&self) -> impl Iterator<Item = &ElementHandle> {
        self.images.iter().chain(self.texts.iter())
    }

    pub fn contains(&self, elem: &str) -> bool {
        self.iter().any(|h| h == elem)
    }
}

fn collect(
    host: &mut dyn SceneHost,
    class: VisualClass,
    include: &[ElementHandle],
    exclude: &[ElementHandle],
) -> Vec<ElementHandle> {
    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();
    let mut seen: HashSet<ElementHandle> = HashSet::new();
    let mut out = Vec::new();
    for handle in host
        .visuals(class)
        .into_iter()
        .chain(include.iter().cloned())
    {
        if excluded.contains(handle.as_str()) {
            continue;
        }
        if seen.insert(handle.clone()) {
            out.push(handle);
        }
    }
    out
}
