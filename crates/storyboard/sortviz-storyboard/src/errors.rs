use sortviz_core::SortError;
use thiserror::Error;

/// Errors produced while building a storyboard.
#[derive(Debug, Error)]
pub enum StoryboardError {
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),
    #[error("invalid storyboard config: {0}")]
    InvalidConfig(String),
}
