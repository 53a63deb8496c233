//! sortviz-core: counting-sort engine (renderer-agnostic)
//!
//! The engine counts occurrences of each non-negative integer in a dense
//! frequency table, then rebuilds the sorted sequence bucket by bucket. Every
//! discrete step can be reported to a [`TraceObserver`] so a visualizer can
//! replay the run without the engine knowing anything about rendering.

pub mod config;
pub mod engine;
pub mod errors;
pub mod frequency;
pub mod trace;

// Re-exports for consumers (adapters)
pub use config::{Config, EmptyInputPolicy, PlacementOrder, DEFAULT_MAX_RANGE};
pub use engine::{count, reconstruct, record_trace, sort, CountingSort, SortOutcome};
pub use errors::SortError;
pub use frequency::{FrequencyTable, MAX_OUTPUT_LEN};
pub use trace::{
    export_trace_json, FnObserver, NoopObserver, TraceEvent, TraceKind, TraceObserver,
};
