//! Trace events and observers.
//!
//! The engine notifies an observer synchronously at every discrete step of a
//! run. Observers never feed back into the computation; a visualizer (or a
//! test) uses them to replay what happened and in which order.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// One observable state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// `frequency[value]` was incremented to `count` while scanning input
    /// index `position`.
    IncrementCount {
        value: i64,
        position: usize,
        count: usize,
    },
    /// `value` was written into output index `slot`.
    PlaceOutput { value: i64, slot: usize },
}

/// Discriminant of a [`TraceEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceKind {
    IncrementCount,
    PlaceOutput,
}

impl TraceEvent {
    #[inline]
    pub fn kind(&self) -> TraceKind {
        match self {
            TraceEvent::IncrementCount { .. } => TraceKind::IncrementCount,
            TraceEvent::PlaceOutput { .. } => TraceKind::PlaceOutput,
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        match self {
            TraceEvent::IncrementCount { value, .. } | TraceEvent::PlaceOutput { value, .. } => {
                *value
            }
        }
    }
}

/// Receiver of trace events. Calls must not block.
pub trait TraceObserver {
    fn on_event(&mut self, event: &TraceEvent);
}

/// Observer that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: &TraceEvent) {}
}

impl TraceObserver for Vec<TraceEvent> {
    fn on_event(&mut self, event: &TraceEvent) {
        self.push(event.clone());
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F> TraceObserver for FnObserver<F>
where
    F: FnMut(&TraceEvent),
{
    fn on_event(&mut self, event: &TraceEvent) {
        (self.0)(event)
    }
}

impl TraceObserver for Sender<TraceEvent> {
    fn on_event(&mut self, event: &TraceEvent) {
        if self.send(event.clone()).is_err() {
            log::debug!("trace receiver dropped; discarding {:?}", event.kind());
        }
    }
}

/// Export a recorded trace as serde_json::Value (stable schema for FFI/serialization).
pub fn export_trace_json(events: &[TraceEvent]) -> serde_json::Value {
    serde_json::to_value(events).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kebab_kind_tag() {
        let ev = TraceEvent::IncrementCount {
            value: 4,
            position: 0,
            count: 1,
        };
        let j = serde_json::to_value(&ev).unwrap();
        assert_eq!(j["kind"], "increment-count");
        assert_eq!(j["position"], 0);

        let ev = TraceEvent::PlaceOutput { value: 8, slot: 6 };
        let j = serde_json::to_value(&ev).unwrap();
        assert_eq!(j["kind"], "place-output");
        assert_eq!(j["slot"], 6);
    }

    #[test]
    fn sender_observer_survives_dropped_receiver() {
        let (mut tx, rx) = std::sync::mpsc::channel::<TraceEvent>();
        drop(rx);
        tx.on_event(&TraceEvent::PlaceOutput { value: 0, slot: 0 });
    }
}
