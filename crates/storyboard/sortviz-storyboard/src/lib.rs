//! sortviz-storyboard
//!
//! Driver side of a counting-sort visualization: runs the engine, then turns
//! its ordered trace into a timed list of cues (what changes, when) together
//! with the render settings a renderer should use. Pacing and frame format
//! live here, never in the engine.

pub mod config;
pub mod cues;
pub mod errors;
pub mod storyboard;

pub use config::{Quality, RenderConfig, StoryboardConfig};
pub use cues::{Cue, CueAction, Target};
pub use errors::StoryboardError;
pub use storyboard::{export_json, Storyboard};
