//! Storyboard: lay a counting-sort run out on a timeline and bake it to frames.

use serde::{Deserialize, Serialize};

use sortviz_core::{CountingSort, SortOutcome, TraceEvent};

use crate::config::{RenderConfig, StoryboardConfig};
use crate::cues::{Cue, CueAction, Target};
use crate::errors::StoryboardError;

/// Timed cue list for one run, plus the render settings it was built for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    pub render: RenderConfig,
    pub outcome: SortOutcome,
    pub cues: Vec<Cue>,
}

/// Append-only cursor over the timeline.
struct Timeline {
    cursor: f32,
    cues: Vec<Cue>,
}

impl Timeline {
    fn new() -> Self {
        Self {
            cursor: 0.0,
            cues: Vec::new(),
        }
    }

    /// Play `actions` together for `duration`, then advance.
    fn play(&mut self, duration: f32, actions: impl IntoIterator<Item = CueAction>) {
        for action in actions {
            self.cues.push(Cue {
                start: self.cursor,
                duration,
                action,
            });
        }
        self.cursor += duration;
    }

    fn pause(&mut self, duration: f32) {
        self.play(duration, [CueAction::Pause]);
    }
}

/// Count-array index for `value`; logs and yields `None` for negatives.
fn bucket_index(value: i64) -> Option<usize> {
    let idx = usize::try_from(value).ok();
    if idx.is_none() {
        log::warn!("skipping trace event with negative value {value}");
    }
    idx
}

impl Storyboard {
    /// Run `engine` over `input` and lay the trace out with `cfg` pacing.
    pub fn build(
        input: &[i64],
        cfg: &StoryboardConfig,
        engine: &CountingSort,
    ) -> Result<Self, StoryboardError> {
        cfg.validate()?;
        let (outcome, events) = engine.record_trace(input)?;
        Ok(Self::from_trace(input, outcome, &events, cfg))
    }

    /// Lay out an already recorded run. `cfg` is assumed valid. Events whose
    /// value cannot index the count array are skipped.
    pub fn from_trace(
        input: &[i64],
        outcome: SortOutcome,
        events: &[TraceEvent],
        cfg: &StoryboardConfig,
    ) -> Self {
        let mut tl = Timeline::new();

        tl.play(cfg.setup_seconds, [CueAction::ShowTitle]);
        tl.play(
            cfg.setup_seconds,
            [CueAction::ShowInput {
                values: input.to_vec(),
            }],
        );
        tl.pause(cfg.pause_seconds);

        tl.play(
            cfg.setup_seconds,
            [CueAction::ShowCounts {
                len: outcome.frequencies.len(),
            }],
        );
        tl.pause(cfg.pause_seconds);

        for ev in events {
            if let TraceEvent::IncrementCount {
                value,
                position,
                count,
            } = *ev
            {
                let Some(index) = bucket_index(value) else {
                    continue;
                };
                tl.play(
                    cfg.step_seconds,
                    [
                        CueAction::SetCount { index, count },
                        CueAction::Highlight {
                            target: Target::Input(position),
                        },
                    ],
                );
            }
        }
        tl.pause(cfg.pause_seconds);

        tl.play(
            cfg.setup_seconds,
            [CueAction::ShowOutput {
                len: outcome.sorted.len(),
            }],
        );
        for ev in events {
            if let TraceEvent::PlaceOutput { value, slot } = *ev {
                let Some(index) = bucket_index(value) else {
                    continue;
                };
                tl.play(
                    cfg.step_seconds,
                    [
                        CueAction::SetOutput { slot, value },
                        CueAction::Highlight {
                            target: Target::Count(index),
                        },
                    ],
                );
            }
        }
        tl.pause(cfg.final_pause_seconds);

        log::debug!(
            "storyboard: {} cues over {:.2}s",
            tl.cues.len(),
            tl.cursor
        );
        Self {
            render: cfg.render.clone(),
            outcome,
            cues: tl.cues,
        }
    }

    /// End time of the last cue.
    pub fn duration(&self) -> f32 {
        self.cues.iter().map(Cue::end).fold(0.0, f32::max)
    }

    /// Cues playing at time `t` (seconds).
    pub fn cues_at(&self, t: f32) -> impl Iterator<Item = &Cue> + '_ {
        self.cues.iter().filter(move |c| c.is_active_at(t))
    }

    /// First and one-past-last frame covered by `cue` at the render frame rate.
    pub fn frame_span(&self, cue: &Cue) -> (u32, u32) {
        let fps = self.render.effective_frame_rate();
        let first = (cue.start * fps).round() as u32;
        let last = (cue.end() * fps).round() as u32;
        (first, last.max(first))
    }

    /// Number of frames needed to play the whole storyboard.
    pub fn total_frames(&self) -> u32 {
        (self.duration() * self.render.effective_frame_rate()).ceil() as u32
    }
}

/// Export a storyboard as serde_json::Value (stable schema for FFI/serialization).
pub fn export_json(storyboard: &Storyboard) -> serde_json::Value {
    serde_json::to_value(storyboard).unwrap_or(serde_json::Value::Null)
}
