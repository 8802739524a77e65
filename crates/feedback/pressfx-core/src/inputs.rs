//! Input contracts for the core engine.
//!
//! Pointer and lifecycle commands are delivered per tick and applied before
//! the active session advances. Adapters build and pass these into
//! `Engine::update()` each frame.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied, in order, before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Pointer-down on the component: start the press animator.
    PointerDown,
    /// Pointer-up on the component: start the release animator.
    PointerUp,
    /// Re-run visual discovery and rebuild the original-color cache.
    Rebind,
    /// Enable or disable the component. Disabling cancels any in-flight
    /// session and force-restores the resting scale and original colors.
    SetActive { active: bool },
}
