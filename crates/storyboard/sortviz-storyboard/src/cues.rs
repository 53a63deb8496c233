//! Cue contracts handed to renderers.
//!
//! Cues describe which on-screen element changes and when. They never say
//! how anything looks; layout and styling belong to the renderer.

use serde::{Deserialize, Serialize};

/// An element of one of the three arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "array", content = "index", rename_all = "snake_case")]
pub enum Target {
    Input(usize),
    Count(usize),
    Output(usize),
}

/// What happens during a cue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CueAction {
    ShowTitle,
    /// Reveal the input array with its values.
    ShowInput { values: Vec<i64> },
    /// Reveal a zeroed count array with `len` buckets.
    ShowCounts { len: usize },
    /// Reveal an empty output array with `len` slots.
    ShowOutput { len: usize },
    /// Replace the text of count bucket `index`.
    SetCount { index: usize, count: usize },
    /// Replace the text of output slot `slot`.
    SetOutput { slot: usize, value: i64 },
    /// Briefly emphasize an element.
    Highlight { target: Target },
    Pause,
}

/// One timed entry on the storyboard. Cues sharing a `start` play together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub start: f32,
    pub duration: f32,
    #[serde(flatten)]
    pub action: CueAction,
}

impl Cue {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Whether `t` falls inside `[start, end)`.
    #[inline]
    pub fn is_active_at(&self, t: f32) -> bool {
        t >= self.start && t < self.end()
    }
}
