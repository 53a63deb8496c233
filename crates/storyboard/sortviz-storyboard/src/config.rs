//! Pacing and render configuration owned by the storyboard driver.

use serde::{Deserialize, Serialize};

use crate::errors::StoryboardError;

/// Frame rate used when the configured one is unusable.
pub const FALLBACK_FRAME_RATE: f32 = 30.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
    Production,
}

/// Output format a renderer should target. Carried through untouched apart
/// from frame-rate sanitizing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub frame_rate: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub quality: Quality,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            pixel_width: 1280,
            pixel_height: 720,
            quality: Quality::Medium,
        }
    }
}

impl RenderConfig {
    /// Frame rate clamped to something bakeable.
    pub fn effective_frame_rate(&self) -> f32 {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate.max(1.0)
        } else {
            FALLBACK_FRAME_RATE
        }
    }
}

/// Durations (seconds) for each kind of cue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryboardConfig {
    /// One counting or placement step.
    pub step_seconds: f32,
    /// Introducing the title or one of the three arrays.
    pub setup_seconds: f32,
    /// Hold between phases.
    pub pause_seconds: f32,
    /// Hold after the last placement.
    pub final_pause_seconds: f32,
    pub render: RenderConfig,
}

impl Default for StoryboardConfig {
    fn default() -> Self {
        Self {
            step_seconds: 0.5,
            setup_seconds: 1.0,
            pause_seconds: 1.0,
            final_pause_seconds: 2.0,
            render: RenderConfig::default(),
        }
    }
}

impl StoryboardConfig {
    pub fn validate(&self) -> Result<(), StoryboardError> {
        let fields = [
            ("step_seconds", self.step_seconds),
            ("setup_seconds", self.setup_seconds),
            ("pause_seconds", self.pause_seconds),
            ("final_pause_seconds", self.final_pause_seconds),
        ];
        for (name, secs) in fields {
            if !secs.is_finite() || secs < 0.0 {
                return Err(StoryboardError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number of seconds (got {secs})"
                )));
            }
        }
        Ok(())
    }
}
