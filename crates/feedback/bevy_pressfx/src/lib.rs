//! Bevy adapter for the Pressfx press-feedback core.
//!
//! The plugin walks the UI subtree under each [`PressFeedback`] component to
//! index color-bearing entities, converts `Interaction` transitions into
//! pointer commands, and drives the core once per frame with the frame
//! delta. All scale/color writes happen through the core via a
//! `SceneHost` implemented over the `World`.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{FeedbackBindingHint, FeedbackExclude, PressFeedback};
pub use systems::{pointer_interaction_system, tick_feedback_system};

pub struct PressFeedbackPlugin;

impl Plugin for PressFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (pointer_interaction_system, tick_feedback_system).chain(),
        );
    }
}
