//! Output contracts from the core engine.
//!
//! Outputs carry the semantic events raised during one tick. The engine
//! writes scale/color values through the host directly, so there is no
//! change list; adapters read events for logging or gameplay hooks.

use serde::{Deserialize, Serialize};

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum FeedbackEvent {
    PressStarted,
    PressCompleted,
    ReleaseStarted,
    ReleaseCompleted,
    /// Visual discovery ran; counts are the resulting bound-set sizes.
    Rebound { images: usize, texts: usize },
    Deactivated,
}

/// Outputs returned by `Engine::update()`. Cleared at the start of each tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<FeedbackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: FeedbackEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
