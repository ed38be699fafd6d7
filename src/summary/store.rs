// src/summary/store.rs
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

use crate::sumtrace;
use crate::summary::centroid::Centroid;
use crate::summary::search::insertion_index;
use crate::{SummaryError, SummaryResult};

/// Ordered centroid storage: paired `means`/`counts` columns sorted by mean.
///
/// Invariants between public calls (except after [`Summary::shuffle`]):
/// - `means` is non-decreasing,
/// - `means.len() == counts.len()`,
/// - no mean is NaN and every count is `> 0`.
///
/// New centroids with an already-present mean land to the *right* of the
/// existing ones; [`Summary::set_at`] may reorder equal-mean runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub(crate) means: Vec<f64>,
    pub(crate) counts: Vec<u64>,
}

/// Owned snapshot of a summary's columns, for handing to an external encoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub means: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Summary {
    /// Empty summary with room for `capacity` centroids.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Summary {
            means: Vec::with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.means.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
    /// Centroids storable without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.means.capacity().min(self.counts.capacity())
    }

    /// Insert `(mean, count)` keeping the columns sorted by mean.
    ///
    /// Fails with [`SummaryError::NaNInput`] / [`SummaryError::ZeroCount`] and leaves
    /// the summary untouched. Infinite means are accepted.
    ///
    /// O(n): the slot is found by scan or binary search, then the tail shifts right.
    pub fn add(&mut self, mean: f64, count: u64) -> SummaryResult<()> {
        if mean.is_nan() {
            return Err(SummaryError::NaNInput {
                context: "centroid mean",
            });
        }
        if count == 0 {
            return Err(SummaryError::ZeroCount {
                context: "centroid count",
            });
        }

        let idx = insertion_index(&self.means, mean);
        self.means.insert(idx, mean);
        self.counts.insert(idx, count);
        Ok(())
    }

    /// Mean at `index`. Panics when `index >= len()`.
    #[inline]
    pub fn mean(&self, index: usize) -> f64 {
        self.means[index]
    }
    /// Count at `index`. Panics when `index >= len()`.
    #[inline]
    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Mean at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline]
    pub unsafe fn mean_unchecked(&self, index: usize) -> f64 {
        debug_assert!(index < self.means.len());
        *self.means.get_unchecked(index)
    }
    /// Count at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline]
    pub unsafe fn count_unchecked(&self, index: usize) -> u64 {
        debug_assert!(index < self.counts.len());
        *self.counts.get_unchecked(index)
    }

    /// Checked access; `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Centroid> {
        let mean = *self.means.get(index)?;
        Some(Centroid::new(mean, self.counts[index]))
    }

    /// Borrow the mean column.
    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means
    }
    /// Borrow the count column.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Overwrite the centroid at `index` and move it back into sorted position.
    ///
    /// Bubbles right while larger than the right neighbour, then left while
    /// smaller than the left one. Assumes everything else is already sorted.
    /// Returns the index the centroid ended up at.
    ///
    /// Panics when `index >= len()`.
    pub fn set_at(&mut self, index: usize, mean: f64, count: u64) -> usize {
        debug_assert!(!mean.is_nan(), "set_at requires a non-NaN mean");
        debug_assert!(count > 0, "set_at requires a positive count");
        self.means[index] = mean;
        self.counts[index] = count;

        let right = self.adjust_right(index);
        let at = if right != index {
            right
        } else {
            self.adjust_left(index)
        };
        if at != index {
            sumtrace!("set_at: moved {} -> {} (mean={})", index, at, mean);
        }
        at
    }

    fn adjust_right(&mut self, index: usize) -> usize {
        let mut i = index;
        while i + 1 < self.means.len() && self.means[i] > self.means[i + 1] {
            self.swap(i, i + 1);
            i += 1;
        }
        i
    }

    fn adjust_left(&mut self, index: usize) -> usize {
        let mut i = index;
        while i > 0 && self.means[i - 1] > self.means[i] {
            self.swap(i - 1, i);
            i -= 1;
        }
        i
    }

    /// Swap two centroids (mean and count travel together).
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.means.swap(i, j);
        self.counts.swap(i, j);
    }

    /// `true` when the mean at `i` is strictly below the mean at `j`.
    #[inline]
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.means[i] < self.means[j]
    }

    /// Whether the means are currently non-decreasing.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.means.windows(2).all(|w| w[0] <= w[1])
    }

    /// Full stable re-sort by mean, e.g. after [`Summary::shuffle`].
    pub fn sort_by_mean(&mut self) {
        if self.is_sorted() {
            return;
        }
        let mut pairs: Vec<(f64, u64)> = self
            .means
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
            .collect();
        pairs.sort_by_key(|&(m, _)| OrderedFloat(m));
        for (i, (m, c)) in pairs.into_iter().enumerate() {
            self.means[i] = m;
            self.counts[i] = c;
        }
    }

    /// Drop every centroid, keeping the allocation.
    pub fn reset(&mut self) {
        sumtrace!("reset: len={} capacity={}", self.len(), self.capacity());
        self.means.clear();
        self.counts.clear();
    }

    /// Independent copies of the mean and count columns.
    pub fn get_data_copy(&self) -> (Vec<f64>, Vec<u64>) {
        (self.means.clone(), self.counts.clone())
    }

    /// Same content as [`Summary::get_data_copy`], as a serde-friendly struct.
    pub fn to_data(&self) -> SummaryData {
        let (means, counts) = self.get_data_copy();
        SummaryData { means, counts }
    }

    /// Centroids in stored order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Centroid> + DoubleEndedIterator + '_ {
        self.means
            .iter()
            .zip(self.counts.iter())
            .map(|(&m, &c)| Centroid::new(m, c))
    }

    /// Visit `(mean, count)` in stored order until the visitor breaks.
    ///
    /// Returns the visitor's `Break` value, or `Continue(())` when every
    /// centroid was visited.
    pub fn for_each<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(f64, u64) -> ControlFlow<B>,
    {
        for (&m, &c) in self.means.iter().zip(self.counts.iter()) {
            visit(m, c)?;
        }
        ControlFlow::Continue(())
    }
}
