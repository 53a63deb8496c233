//! Dense value → occurrence-count table.

use serde::{Deserialize, Serialize};

use crate::errors::SortError;

/// Largest output length a table may describe: the element count of the
/// biggest `Vec<i64>` the allocator can be asked for.
pub const MAX_OUTPUT_LEN: usize = isize::MAX as usize / std::mem::size_of::<i64>();

/// Frequency table indexed by value. Slot `v` holds how many times `v`
/// occurred in the input; the index domain is `0..=max` with no gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct FrequencyTable {
    counts: Vec<usize>,
}

impl FrequencyTable {
    /// Zeroed table covering `0..len`.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Build a table from explicit counts. The total must not exceed
    /// [`MAX_OUTPUT_LEN`], so reconstructing it can always allocate.
    pub fn from_counts(counts: Vec<usize>) -> Result<Self, SortError> {
        counts
            .iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .filter(|&total| total <= MAX_OUTPUT_LEN)
            .ok_or(SortError::CountOverflow {
                limit: MAX_OUTPUT_LEN,
            })?;
        Ok(Self { counts })
    }

    /// Increment the bucket for `index`, returning the new count.
    #[inline]
    pub(crate) fn bump(&mut self, index: usize) -> usize {
        let slot = &mut self.counts[index];
        *slot += 1;
        *slot
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `value`, or `None` outside the index domain.
    pub fn get(&self, value: i64) -> Option<usize> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| self.counts.get(idx).copied())
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Sum of all buckets, i.e. the length of the reconstructed output.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest index in the domain (`len - 1`), `None` for an empty table.
    pub fn max_value(&self) -> Option<i64> {
        self.counts.len().checked_sub(1).map(|m| m as i64)
    }

    /// `(value, count)` pairs in ascending value order, zero buckets included.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(v, &c)| (v as i64, c))
    }

    pub fn into_counts(self) -> Vec<usize> {
        self.counts
    }
}

impl TryFrom<Vec<usize>> for FrequencyTable {
    type Error = SortError;

    fn try_from(counts: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_counts(counts)
    }
}

impl From<FrequencyTable> for Vec<usize> {
    fn from(table: FrequencyTable) -> Self {
        table.counts
    }
}
