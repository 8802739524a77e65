//! Shared test fixtures: an in-memory scene host for exercising the
//! press-feedback core without a real UI framework.
//!
//! `MockScene` owns one root transform plus a flat list of color-bearing
//! elements in a stable enumeration order. Elements can be destroyed to
//! exercise the weak-handle paths, and scenes can be described as JSON
//! blobs for declarative test setup.

use anyhow::{bail, Context, Result};
use hashbrown::HashMap;
use serde::Deserialize;

use pressfx_core::{Color, ElementHandle, Scale, SceneHost, TargetHandle, VisualClass};

#[derive(Clone, Debug)]
pub struct MockElement {
    pub class: VisualClass,
    pub color: Color,
    pub alive: bool,
    /// Whether subtree enumeration reports this element. Detached elements
    /// stay resolvable by handle, modelling objects outside the subtree
    /// that only an include list can pull in.
    pub enumerated: bool,
}

/// In-memory scene: one default target plus named transforms and elements.
#[derive(Clone, Debug)]
pub struct MockScene {
    root: TargetHandle,
    scales: HashMap<TargetHandle, Scale>,
    elements: Vec<(ElementHandle, MockElement)>,
}

impl Default for MockScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MockScene {
    /// A scene with a single live root transform at scale (1,1,1).
    pub fn new() -> Self {
        let mut scales = HashMap::new();
        scales.insert("root".to_string(), [1.0, 1.0, 1.0]);
        Self {
            root: "root".to_string(),
            scales,
            elements: Vec::new(),
        }
    }

    pub fn with_root_scale(mut self, scale: Scale) -> Self {
        self.scales.insert(self.root.clone(), scale);
        self
    }

    pub fn with_image(mut self, handle: &str, color: Color) -> Self {
        self.push(handle, VisualClass::Image, color);
        self
    }

    pub fn with_text(mut self, handle: &str, color: Color) -> Self {
        self.push(handle, VisualClass::Text, color);
        self
    }

    /// An image outside the enumerated subtree; reachable only through an
    /// include list.
    pub fn with_detached_image(mut self, handle: &str, color: Color) -> Self {
        self.push_detached(handle, VisualClass::Image, color);
        self
    }

    /// An extra named transform, addressable as a target override.
    pub fn with_transform(mut self, handle: &str, scale: Scale) -> Self {
        self.scales.insert(handle.to_string(), scale);
        self
    }

    fn push(&mut self, handle: &str, class: VisualClass, color: Color) {
        self.elements.push((
            handle.to_string(),
            MockElement {
                class,
                color,
                alive: true,
                enumerated: true,
            },
        ));
    }

    fn push_detached(&mut self, handle: &str, class: VisualClass, color: Color) {
        self.elements.push((
            handle.to_string(),
            MockElement {
                class,
                color,
                alive: true,
                enumerated: false,
            },
        ));
    }

    /// Simulate the element being destroyed: handle lookups fail from now on.
    pub fn destroy(&mut self, handle: &str) {
        for (h, elem) in self.elements.iter_mut() {
            if h == handle {
                elem.alive = false;
            }
        }
    }

    /// Simulate the root transform being destroyed.
    pub fn destroy_root(&mut self) {
        self.scales.remove(&self.root);
    }

    /// Current color of a live element, bypassing the host trait.
    pub fn color_of(&self, handle: &str) -> Option<Color> {
        self.elements
            .iter()
            .find(|(h, e)| h == handle && e.alive)
            .map(|(_, e)| e.color)
    }

    /// Current scale of the root transform.
    pub fn root_scale(&self) -> Option<Scale> {
        self.scales.get(&self.root).copied()
    }

    /// Current scale of any named transform.
    pub fn scale_of(&self, handle: &str) -> Option<Scale> {
        self.scales.get(handle).copied()
    }

    pub fn root_handle(&self) -> &str {
        &self.root
    }

    /// Build a scene from a JSON description:
    ///
    /// ```json
    /// {
    ///   "root_scale": [1.0, 1.0, 1.0],
    ///   "images": [{ "handle": "icon", "color": [1, 1, 1, 1] }],
    ///   "texts":  [{ "handle": "label", "color": [0, 0, 0, 1] }]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: SceneSpec = serde_json::from_str(json).context("scene json should parse")?;
        let mut scene = MockScene::new();
        if let Some(scale) = spec.root_scale {
            scene = scene.with_root_scale(scale);
        }
        for img in &spec.images {
            if scene.color_of(&img.handle).is_some() {
                bail!("duplicate element handle {:?}", img.handle);
            }
            scene.push(&img.handle, VisualClass::Image, img.color);
        }
        for txt in &spec.texts {
            if scene.color_of(&txt.handle).is_some() {
                bail!("duplicate element handle {:?}", txt.handle);
            }
            scene.push(&txt.handle, VisualClass::Text, txt.color);
        }
        Ok(scene)
    }
}

#[derive(Debug, Deserialize)]
struct SceneSpec {
    #[serde(default)]
    root_scale: Option<Scale>,
    #[serde(default)]
    images: Vec<ElementSpec>,
    #[serde(default)]
    texts: Vec<ElementSpec>,
}

#[derive(Debug, Deserialize)]
struct ElementSpec {
    handle: String,
    color: Color,
}

impl SceneHost for MockScene {
    fn visuals(&mut self, class: VisualClass) -> Vec<ElementHandle> {
        self.elements
            .iter()
            .filter(|(_, e)| e.alive && e.enumerated && e.class == class)
            .map(|(h, _)| h.clone())
            .collect()
    }

    fn color(&self, elem: &ElementHandle) -> Option<Color> {
        self.color_of(elem)
    }

    fn set_color(&mut self, elem: &ElementHandle, color: Color) -> bool {
        for (h, e) in self.elements.iter_mut() {
            if h == elem && e.alive {
                e.color = color;
                return true;
            }
        }
        false
    }

    fn scale(&self, target: &TargetHandle) -> Option<Scale> {
        self.scales.get(target).copied()
    }

    fn set_scale(&mut self, target: &TargetHandle, scale: Scale) -> bool {
        match self.scales.get_mut(target) {
            Some(slot) => {
                *slot = scale;
                true
            }
            None => false,
        }
    }

    fn default_target(&self) -> Option<TargetHandle> {
        self.scales.contains_key(&self.root).then(|| self.root.clone())
    }
}
