//! Feedback parameters, fixed at bind time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::binding::{ElementHandle, TargetHandle};

/// Parameters for the press/release effect. There is no runtime
/// reconfiguration API; construct a new engine to change these.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit target override; when `None` the host's own transform is used.
    pub target: Option<TargetHandle>,

    /// Extra elements to animate beyond subtree discovery.
    pub include_images: Vec<ElementHandle>,
    pub include_texts: Vec<ElementHandle>,

    /// Elements removed from the bound sets. Excludes win over includes.
    pub exclude_images: Vec<ElementHandle>,
    pub exclude_texts: Vec<ElementHandle>,

    /// Scale factor applied to the resting scale while pressed.
    pub scale_amount: f32,
    /// Press transition length in seconds.
    pub duration: f32,
    /// Amplitude of the release overshoot.
    pub punch_strength: f32,
    /// Release transition length in seconds.
    pub punch_duration: f32,
    /// RGB multiplier applied to original colors while pressed, in [0, 1].
    pub pressed_color_multiplier: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            include_images: Vec::new(),
            include_texts: Vec::new(),
            exclude_images: Vec::new(),
            exclude_texts: Vec::new(),
            scale_amount: 0.95,
            duration: 0.1,
            punch_strength: 0.08,
            punch_duration: 0.15,
            pressed_color_multiplier: 0.85,
        }
    }
}

/// Errors produced while parsing or validating feedback parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(String),
    #[error("{field} must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("pressed_color_multiplier must be within [0, 1], got {0}")]
    MultiplierRange(f32),
}

impl Config {
    /// Parse a JSON blob and validate ranges.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Config =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-finite or negative timing/scaling values and a pressed
    /// multiplier outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scale_amount", self.scale_amount),
            ("duration", self.duration),
            ("punch_strength", self.punch_strength),
            ("punch_duration", self.punch_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.pressed_color_multiplier) {
            return Err(ConfigError::MultiplierRange(self.pressed_color_multiplier));
        }
        Ok(())
    }
}
