use thiserror::Error;

/// Errors produced while counting or reconstructing.
///
/// Every variant is a caller-input problem; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("input is empty and the configured policy rejects empty input")]
    EmptyInput,
    #[error("negative value {value} at input index {index}")]
    NegativeValue { index: usize, value: i64 },
    #[error("value range 0..={max} exceeds the configured limit of {limit} buckets")]
    RangeTooLarge { max: i64, limit: usize },
    #[error("frequency counts sum past the maximum output length of {limit}")]
    CountOverflow { limit: usize },
}
