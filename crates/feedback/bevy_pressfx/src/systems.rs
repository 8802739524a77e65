use bevy::prelude::*;
use std::collections::HashMap;

use crate::components::{FeedbackBindingHint, FeedbackExclude, PressFeedback};
use pressfx_core::{
    Color as Rgba, Command, ElementHandle, Scale, SceneHost, TargetHandle, VisualClass,
};

/// Internal: stable string handle for an entity. A `FeedbackBindingHint`
/// wins, then the entity's `Name`, then an entity-bits fallback.
fn handle_for(world: &World, entity: Entity) -> String {
    if let Some(hint) = world.get::<FeedbackBindingHint>(entity) {
        return hint.path.clone();
    }
    match world.get::<Name>(entity) {
        Some(name) => name.as_str().to_string(),
        None => format!("entity-{}", entity.to_bits()),
    }
}

#[inline]
fn to_rgba(color: Color) -> Rgba {
    let s = color.to_srgba();
    [s.red, s.green, s.blue, s.alpha]
}

#[inline]
fn from_rgba(c: Rgba) -> Color {
    Color::srgba(c[0], c[1], c[2], c[3])
}

/// Walks descendants of the effect root and indexes every color-bearing
/// entity (Text is text-like, any other entity with a BackgroundColor is
/// image-like) plus every transform as a scale target. Entities marked
/// `FeedbackExclude` are skipped as visuals; their children still walk.
fn build_index(
    world: &World,
    root: Entity,
) -> (
    HashMap<String, (Entity, VisualClass)>,
    HashMap<String, Entity>,
) {
    let mut visuals = HashMap::new();
    let mut targets = HashMap::new();

    fn walk(
        world: &World,
        entity: Entity,
        visuals: &mut HashMap<String, (Entity, VisualClass)>,
        targets: &mut HashMap<String, Entity>,
    ) {
        let handle = handle_for(world, entity);
        if world.get::<Transform>(entity).is_some() {
            targets.insert(handle.clone(), entity);
        }
        if world.get::<FeedbackExclude>(entity).is_none() {
            if world.get::<Text>(entity).is_some() {
                visuals.insert(handle, (entity, VisualClass::Text));
            } else if world.get::<BackgroundColor>(entity).is_some() {
                visuals.insert(handle, (entity, VisualClass::Image));
            }
        }
        if let Some(children) = world.get::<Children>(entity) {
            for &child in children.iter() {
                walk(world, child, visuals, targets);
            }
        }
    }

    walk(world, root, &mut visuals, &mut targets);
    (visuals, targets)
}

/// SceneHost over the Bevy world. Handle lookups re-check entity liveness
/// on every access, so despawned entities degrade to skipped writes.
struct WorldHost<'a> {
    world: &'a mut World,
    root_handle: String,
    visuals: &'a HashMap<String, (Entity, VisualClass)>,
    targets: &'a HashMap<String, Entity>,
}

impl SceneHost for WorldHost<'_> {
    fn visuals(&mut self, class: VisualClass) -> Vec<ElementHandle> {
        let mut out: Vec<ElementHandle> = self
            .visuals
            .iter()
            .filter(|(_, (entity, c))| *c == class && self.world.get_entity(*entity).is_some())
            .map(|(handle, _)| handle.clone())
            .collect();
        // HashMap iteration order is arbitrary; keep enumeration stable.
        out.sort();
        out
    }

    fn color(&self, elem: &ElementHandle) -> Option<Rgba> {
        let (entity, class) = self.visuals.get(elem)?;
        match class {
            VisualClass::Image => self
                .world
                .get::<BackgroundColor>(*entity)
                .map(|bg| to_rgba(bg.0)),
            VisualClass::Text => self
                .world
                .get::<Text>(*entity)
                .and_then(|text| text.sections.first())
                .map(|section| to_rgba(section.style.color)),
        }
    }

    fn set_color(&mut self, elem: &ElementHandle, color: Rgba) -> bool {
        let Some((entity, class)) = self.visuals.get(elem) else {
            return false;
        };
        match class {
            VisualClass::Image => match self.world.get_mut::<BackgroundColor>(*entity) {
                Some(mut bg) => {
                    bg.0 = from_rgba(color);
                    true
                }
                None => false,
            },
            VisualClass::Text => match self.world.get_mut::<Text>(*entity) {
                Some(mut text) => {
                    for section in text.sections.iter_mut() {
                        section.style.color = from_rgba(color);
                    }
                    true
                }
                None => false,
            },
        }
    }

    fn scale(&self, target: &TargetHandle) -> Option<Scale> {
        let entity = self.targets.get(target)?;
        self.world
            .get::<Transform>(*entity)
            .map(|transform| transform.scale.to_array())
    }

    fn set_scale(&mut self, target: &TargetHandle, scale: Scale) -> bool {
        let Some(entity) = self.targets.get(target) else {
            return false;
        };
        match self.world.get_mut::<Transform>(*entity) {
            Some(mut transform) => {
                transform.scale = Vec3::from_array(scale);
                true
            }
            None => false,
        }
    }

    fn default_target(&self) -> Option<TargetHandle> {
        self.targets
            .contains_key(&self.root_handle)
            .then(|| self.root_handle.clone())
    }
}

/// Translates `Interaction` transitions on the effect root into pointer
/// commands. A press queues PointerDown; leaving the pressed state queues
/// PointerUp (hover enter/exit alone does nothing).
pub fn pointer_interaction_system(
    mut query: Query<(&Interaction, &mut PressFeedback), Changed<Interaction>>,
) {
    for (interaction, mut feedback) in query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                feedback.pointer_down = true;
                feedback.queue(Command::PointerDown);
            }
            Interaction::Hovered | Interaction::None => {
                if feedback.pointer_down {
                    feedback.pointer_down = false;
                    feedback.queue(Command::PointerUp);
                }
            }
        }
    }
}

/// Drives every feedback component by one frame: (re)build the handle
/// index when needed, drain queued commands, and advance the core with
/// the frame delta.
pub fn tick_feedback_system(world: &mut World) {
    let dt = world.resource::<Time>().delta_seconds();
    let mut query = world.query_filtered::<Entity, With<PressFeedback>>();
    let entities: Vec<Entity> = query.iter(world).collect();

    for entity in entities {
        let Some(mut feedback) = world.entity_mut(entity).take::<PressFeedback>() else {
            continue;
        };
        let inputs = std::mem::take(&mut feedback.queued);

        if !feedback.bound || inputs.commands.contains(&Command::Rebind) {
            let (visuals, targets) = build_index(world, entity);
            feedback.visuals = visuals;
            feedback.targets = targets;
        }
        let first_bind = !feedback.bound;
        feedback.bound = true;

        let root_handle = handle_for(world, entity);
        {
            let PressFeedback {
                engine,
                visuals,
                targets,
                ..
            } = &mut feedback;
            let mut host = WorldHost {
                world: &mut *world,
                root_handle,
                visuals: &*visuals,
                targets: &*targets,
            };
            if first_bind {
                engine.bind(&mut host);
            }
            let outputs = engine.update(dt, inputs, &mut host);
            for event in &outputs.events {
                debug!("press feedback on {entity:?}: {event:?}");
            }
        }

        world.entity_mut(entity).insert(feedback);
    }
}
