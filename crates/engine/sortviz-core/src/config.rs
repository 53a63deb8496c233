//! Core configuration for sortviz-core.

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of buckets a single run may allocate.
pub const DEFAULT_MAX_RANGE: usize = 1 << 24;

/// What to do when the input has no elements and therefore no maximum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Empty input yields an empty output and an empty frequency table.
    #[default]
    AllowEmpty,
    /// Empty input is rejected with `SortError::EmptyInput`.
    Reject,
}

/// Order in which the reconstruction phase places values into the output.
///
/// Both orders produce the same sorted sequence; only the order of
/// `place-output` trace events differs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOrder {
    /// Values ascending, slots filled from 0 upward.
    #[default]
    Ascending,
    /// Values descending, slots filled from the last one downward.
    FromEnd,
}

/// Configuration for a counting-sort run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub empty_input: EmptyInputPolicy,
    pub placement: PlacementOrder,
    /// Maximum frequency-table size (max value + 1) accepted before any
    /// allocation happens.
    pub max_range: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_input: EmptyInputPolicy::default(),
            placement: PlacementOrder::default(),
            max_range: DEFAULT_MAX_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "placement": "from_end" }"#).unwrap();
        assert_eq!(cfg.placement, PlacementOrder::FromEnd);
        assert_eq!(cfg.empty_input, EmptyInputPolicy::AllowEmpty);
        assert_eq!(cfg.max_range, DEFAULT_MAX_RANGE);
    }
}
