//! Engine: component state, the press/release phase machine, and per-tick
//! stepping.
//!
//! Methods:
//! - new, bind, update (apply commands → advance session), introspection
//!
//! The engine owns no scene objects. Every scale/color access goes through
//! the [`SceneHost`] by handle, resolved at each access; lookups that fail
//! are skipped silently. At most one session is in flight; starting a new
//! one is the cancellation mechanism for the old one.

use crate::binding::{BoundSet, ElementHandle, SceneHost, TargetHandle};
use crate::cache::ColorCache;
use crate::config::Config;
use crate::ease::{clamp01, ease_out_sine, lerp_rgb, lerp_vec3, punch};
use crate::inputs::{Command, Inputs};
use crate::outputs::{FeedbackEvent, Outputs};
use crate::value::{mul3, scale_rgb, Color, Scale};
use serde::{Deserialize, Serialize};

/// Where the component currently is in the press/release cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Pressing,
    Pressed,
    Releasing,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SessionKind {
    Press,
    Release,
}

/// One in-flight animation: elapsed time plus start-of-session snapshots.
/// Start colors may differ from the cached originals when this session
/// interrupted another one mid-transition.
#[derive(Clone, Debug)]
struct Session {
    kind: SessionKind,
    elapsed: f32,
    start_scale: Scale,
    start_colors: Vec<(ElementHandle, Color)>,
}

/// The press-feedback component core.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    target: Option<TargetHandle>,
    resting_scale: Scale,
    resting_recorded: bool,
    bound: BoundSet,
    cache: ColorCache,
    active: bool,
    phase: Phase,
    session: Option<Session>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an engine with the given parameters. Call [`Engine::bind`]
    /// with a host before delivering commands.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            target: None,
            resting_scale: [1.0, 1.0, 1.0],
            resting_recorded: false,
            bound: BoundSet::default(),
            cache: ColorCache::new(),
            active: true,
            phase: Phase::Idle,
            session: None,
            outputs: Outputs::default(),
        }
    }

    /// Resolve the bound target (explicit override or the host's own
    /// transform), record the resting scale on first resolution, discover
    /// the visual sets, and capture original colors. Idempotent for an
    /// unchanged subtree; safe to call again at any time to rebind.
    pub fn bind(&mut self, host: &mut dyn SceneHost) {
        self.target = self.cfg.target.clone().or_else(|| host.default_target());
        if !self.resting_recorded {
            if let Some(scale) = self.target.as_ref().and_then(|t| host.scale(t)) {
                self.resting_scale = scale;
                self.resting_recorded = true;
            }
        }
        self.bound = BoundSet::discover(host, &self.cfg);
        self.cache.capture(&self.bound, host);
        log::debug!(
            "bound {} images, {} texts (target: {:?})",
            self.bound.images.len(),
            self.bound.texts.len(),
            self.target
        );
    }

    /// Step the component by `dt` seconds with the given commands.
    /// Commands are applied first, then the active session advances; the
    /// returned outputs hold the events raised during this tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs, host: &mut dyn SceneHost) -> &Outputs {
        self.outputs.clear();
        self.apply_inputs(inputs, host);
        self.advance(dt, host);
        &self.outputs
    }

    fn apply_inputs(&mut self, inputs: Inputs, host: &mut dyn SceneHost) {
        for cmd in inputs.commands {
            match cmd {
                Command::PointerDown => self.begin_press(host),
                Command::PointerUp => self.begin_release(host),
                Command::Rebind => {
                    self.bind(host);
                    self.outputs.push_event(FeedbackEvent::Rebound {
                        images: self.bound.images.len(),
                        texts: self.bound.texts.len(),
                    });
                }
                Command::SetActive { active } => self.set_active(active, host),
            }
        }
    }

    /// Start the press animator, cancelling any running session.
    /// No-op while inactive or when the target cannot be resolved.
    fn begin_press(&mut self, host: &mut dyn SceneHost) {
        if !self.active {
            return;
        }
        let Some(start_scale) = self.target.as_ref().and_then(|t| host.scale(t)) else {
            return;
        };
        self.session = Some(Session {
            kind: SessionKind::Press,
            elapsed: 0.0,
            start_scale,
            start_colors: self.snapshot_colors(host),
        });
        self.phase = Phase::Pressing;
        self.outputs.push_event(FeedbackEvent::PressStarted);
        log::debug!("press started from scale {start_scale:?}");
    }

    /// Start the release animator, cancelling any running session.
    /// No-op while inactive, from IDLE (nothing to release), or when the
    /// target cannot be resolved.
    fn begin_release(&mut self, host: &mut dyn SceneHost) {
        if !self.active || self.phase == Phase::Idle {
            return;
        }
        let Some(start_scale) = self.target.as_ref().and_then(|t| host.scale(t)) else {
            return;
        };
        self.session = Some(Session {
            kind: SessionKind::Release,
            elapsed: 0.0,
            start_scale,
            start_colors: self.snapshot_colors(host),
        });
        self.phase = Phase::Releasing;
        self.outputs.push_event(FeedbackEvent::ReleaseStarted);
        log::debug!("release started from scale {start_scale:?}");
    }

    fn set_active(&mut self, active: bool, host: &mut dyn SceneHost) {
        if self.active == active {
            return;
        }
        self.active = active;
        if !active {
            self.deactivate(host);
        }
    }

    /// Cancel any running session, force the scale back to resting, and
    /// force-restore every cached original color. Always returns to the
    /// true baseline, never to a session-start snapshot.
    fn deactivate(&mut self, host: &mut dyn SceneHost) {
        self.session = None;
        self.phase = Phase::Idle;
        if let Some(target) = &self.target {
            let _ = host.set_scale(target, self.resting_scale);
        }
        self.cache.restore(host);
        self.outputs.push_event(FeedbackEvent::Deactivated);
        log::debug!("deactivated, restored resting state");
    }

    /// Current colors of the bound set, skipping elements the host can no
    /// longer resolve.
    fn snapshot_colors(&self, host: &dyn SceneHost) -> Vec<(ElementHandle, Color)> {
        self.bound
            .iter()
            .filter_map(|elem| host.color(elem).map(|c| (elem.clone(), c)))
            .collect()
    }

    /// Advance the active session by `dt`. On the completing tick, scale
    /// and colors snap exactly to their end targets.
    fn advance(&mut self, dt: f32, host: &mut dyn SceneHost) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.elapsed += dt.max(0.0);

        let duration = match session.kind {
            SessionKind::Press => self.cfg.duration,
            SessionKind::Release => self.cfg.punch_duration,
        };
        let done = session.elapsed >= duration;
        let t = if done || duration <= 0.0 {
            1.0
        } else {
            clamp01(session.elapsed / duration)
        };

        match session.kind {
            SessionKind::Press => self.step_press(&session, t, done, host),
            SessionKind::Release => self.step_release(&session, t, done, host),
        }

        if done {
            match session.kind {
                SessionKind::Press => {
                    self.phase = Phase::Pressed;
                    self.outputs.push_event(FeedbackEvent::PressCompleted);
                }
                SessionKind::Release => {
                    self.phase = Phase::Idle;
                    self.outputs.push_event(FeedbackEvent::ReleaseCompleted);
                }
            }
        } else {
            self.session = Some(session);
        }
    }

    fn step_press(&mut self, session: &Session, t: f32, done: bool, host: &mut dyn SceneHost) {
        let eased = ease_out_sine(t);
        let pressed_scale = mul3(self.resting_scale, self.cfg.scale_amount);
        if let Some(target) = &self.target {
            let scale = if done {
                pressed_scale
            } else {
                lerp_vec3(session.start_scale, pressed_scale, eased)
            };
            let _ = host.set_scale(target, scale);
        }
        for (elem, start) in &session.start_colors {
            let Some(original) = self.cache.original(elem) else {
                continue;
            };
            let goal = scale_rgb(original, self.cfg.pressed_color_multiplier);
            let color = if done {
                // Exact end target, alpha untouched.
                [goal[0], goal[1], goal[2], start[3]]
            } else {
                lerp_rgb(*start, goal, eased)
            };
            let _ = host.set_color(elem, color);
        }
    }

    fn step_release(&mut self, session: &Session, t: f32, done: bool, host: &mut dyn SceneHost) {
        if let Some(target) = &self.target {
            let scale = if done {
                self.resting_scale
            } else {
                mul3(
                    self.resting_scale,
                    1.0 + punch(t, self.cfg.punch_strength),
                )
            };
            let _ = host.set_scale(target, scale);
        }
        if done {
            // Exact baseline regardless of accumulated interpolation drift.
            self.cache.restore(host);
        } else {
            for (elem, start) in &session.start_colors {
                let Some(original) = self.cache.original(elem) else {
                    continue;
                };
                let _ = host.set_color(elem, lerp_rgb(*start, original, t));
            }
        }
    }

    // Introspection

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    pub fn target(&self) -> Option<&TargetHandle> {
        self.target.as_ref()
    }

    pub fn resting_scale(&self) -> Scale {
        self.resting_scale
    }

    pub fn bound_images(&self) -> &[ElementHandle] {
        &self.bound.images
    }

    pub fn bound_texts(&self) -> &[ElementHandle] {
        &self.bound.texts
    }

    /// The cached original color for an element, if it was captured.
    pub fn original_color(&self, elem: &str) -> Option<Color> {
        self.cache.original(elem)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
