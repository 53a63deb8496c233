//! Engine: validation, counting pass and reconstruction pass.
//!
//! Methods:
//! - count (validate → zeroed table → left-to-right increments)
//! - reconstruct (bucket walk in the configured placement order)
//! - sort (count → reconstruct)
//!
//! Each method has a `_traced` twin that reports every step to a
//! [`TraceObserver`] before moving on to the next one.

use serde::{Deserialize, Serialize};

use crate::config::{Config, EmptyInputPolicy, PlacementOrder};
use crate::errors::SortError;
use crate::frequency::FrequencyTable;
use crate::trace::{NoopObserver, TraceEvent, TraceObserver};

/// Result of a full sort: the ordered output plus the table it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    pub sorted: Vec<i64>,
    pub frequencies: FrequencyTable,
}

/// Counting-sort engine. Holds configuration only; every run starts from
/// fresh buffers.
#[derive(Clone, Debug, Default)]
pub struct CountingSort {
    cfg: Config,
}

impl CountingSort {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Check the whole input before touching any table. Returns the number
    /// of buckets the run needs.
    fn bucket_len(&self, input: &[i64]) -> Result<usize, SortError> {
        if input.is_empty() {
            return match self.cfg.empty_input {
                EmptyInputPolicy::AllowEmpty => Ok(0),
                EmptyInputPolicy::Reject => {
                    log::warn!("rejecting empty input");
                    Err(SortError::EmptyInput)
                }
            };
        }

        let mut max = 0i64;
        for (index, &value) in input.iter().enumerate() {
            if value < 0 {
                log::warn!("rejecting negative value {value} at index {index}");
                return Err(SortError::NegativeValue { index, value });
            }
            if value > max {
                max = value;
            }
        }

        let limit = self.cfg.max_range;
        usize::try_from(max)
            .ok()
            .and_then(|m| m.checked_add(1))
            .filter(|&len| len <= limit)
            .ok_or_else(|| {
                log::warn!("rejecting value range 0..={max} (limit {limit})");
                SortError::RangeTooLarge { max, limit }
            })
    }

    /// Build the frequency table for `input`.
    pub fn count(&self, input: &[i64]) -> Result<FrequencyTable, SortError> {
        self.count_traced(input, &mut NoopObserver)
    }

    /// Build the frequency table, reporting one `IncrementCount` per element
    /// in input order.
    pub fn count_traced(
        &self,
        input: &[i64],
        observer: &mut dyn TraceObserver,
    ) -> Result<FrequencyTable, SortError> {
        let len = self.bucket_len(input)?;
        let mut table = FrequencyTable::zeroed(len);

        for (position, &value) in input.iter().enumerate() {
            // Validated non-negative and below `len`.
            let count = table.bump(value as usize);
            observer.on_event(&TraceEvent::IncrementCount {
                value,
                position,
                count,
            });
        }
        Ok(table)
    }

    /// Expand a frequency table back into a non-decreasing sequence.
    pub fn reconstruct(&self, table: &FrequencyTable) -> Vec<i64> {
        self.reconstruct_traced(table, &mut NoopObserver)
    }

    /// Expand a frequency table, reporting one `PlaceOutput` per element.
    pub fn reconstruct_traced(
        &self,
        table: &FrequencyTable,
        observer: &mut dyn TraceObserver,
    ) -> Vec<i64> {
        let n = table.total();
        match self.cfg.placement {
            PlacementOrder::Ascending => {
                let mut out = Vec::with_capacity(n);
                for (value, count) in table.iter() {
                    for _ in 0..count {
                        observer.on_event(&TraceEvent::PlaceOutput {
                            value,
                            slot: out.len(),
                        });
                        out.push(value);
                    }
                }
                out
            }
            PlacementOrder::FromEnd => {
                let mut out = vec![0i64; n];
                let mut slot = n;
                for (value, count) in table.iter().rev() {
                    for _ in 0..count {
                        slot -= 1;
                        out[slot] = value;
                        observer.on_event(&TraceEvent::PlaceOutput { value, slot });
                    }
                }
                out
            }
        }
    }

    /// Sort `input` without tracing.
    pub fn sort(&self, input: &[i64]) -> Result<SortOutcome, SortError> {
        self.sort_traced(input, &mut NoopObserver)
    }

    /// Sort `input`, reporting the counting pass followed by the placement pass.
    pub fn sort_traced(
        &self,
        input: &[i64],
        observer: &mut dyn TraceObserver,
    ) -> Result<SortOutcome, SortError> {
        log::debug!("counting sort: n={}", input.len());
        let frequencies = self.count_traced(input, observer)?;
        let sorted = self.reconstruct_traced(&frequencies, observer);
        log::debug!(
            "counting sort done: n={} buckets={}",
            sorted.len(),
            frequencies.len()
        );
        Ok(SortOutcome {
            sorted,
            frequencies,
        })
    }

    /// Sort and collect the full trace.
    pub fn record_trace(
        &self,
        input: &[i64],
    ) -> Result<(SortOutcome, Vec<TraceEvent>), SortError> {
        let mut events: Vec<TraceEvent> = Vec::with_capacity(input.len().saturating_mul(2));
        let outcome = self.sort_traced(input, &mut events)?;
        Ok((outcome, events))
    }
}

/// Frequency table for `input` under the default configuration.
pub fn count(input: &[i64]) -> Result<FrequencyTable, SortError> {
    CountingSort::default().count(input)
}

/// Sorted sequence for `table` under the default configuration.
pub fn reconstruct(table: &FrequencyTable) -> Vec<i64> {
    CountingSort::default().reconstruct(table)
}

/// Sort `input` under the default configuration.
pub fn sort(input: &[i64]) -> Result<SortOutcome, SortError> {
    CountingSort::default().sort(input)
}

/// Sort `input` under the default configuration and collect the trace.
pub fn record_trace(input: &[i64]) -> Result<(SortOutcome, Vec<TraceEvent>), SortError> {
    CountingSort::default().record_trace(input)
}
