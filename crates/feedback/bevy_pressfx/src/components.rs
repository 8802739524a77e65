use bevy::prelude::*;
use std::collections::HashMap;

use pressfx_core::{Command, Config, Engine, Inputs, VisualClass};

/// Press-feedback effect on a UI subtree. The entity carrying this
/// component is the effect root: its `Transform` scales (unless the config
/// overrides the target) and every color-bearing descendant participates
/// unless excluded.
#[derive(Component)]
pub struct PressFeedback {
    pub engine: Engine,
    pub(crate) queued: Inputs,
    pub(crate) bound: bool,
    pub(crate) pointer_down: bool,
    pub(crate) visuals: HashMap<String, (Entity, VisualClass)>,
    pub(crate) targets: HashMap<String, Entity>,
}

impl PressFeedback {
    pub fn new(cfg: Config) -> Self {
        Self {
            engine: Engine::new(cfg),
            queued: Inputs::default(),
            bound: false,
            pointer_down: false,
            visuals: HashMap::new(),
            targets: HashMap::new(),
        }
    }

    /// Queue a command for the next tick.
    pub fn queue(&mut self, command: Command) {
        self.queued.commands.push(command);
    }

    /// Re-run visual discovery on the next tick (e.g. after spawning or
    /// despawning descendants, or from an editor command).
    pub fn request_rebind(&mut self) {
        self.queue(Command::Rebind);
    }

    /// Enable or disable the effect. Disabling restores the resting scale
    /// and original colors on the next tick.
    pub fn set_active(&mut self, active: bool) {
        self.queue(Command::SetActive { active });
    }
}

/// Marker: this entity's color never participates in the effect.
/// Descendants of an excluded entity are still considered.
#[derive(Component)]
pub struct FeedbackExclude;

/// Optional per-entity override for the handle the core sees, instead of
/// the entity's `Name`. Handles must be unique under one effect root.
#[derive(Component, Debug, Clone)]
pub struct FeedbackBindingHint {
    pub path: String,
}
