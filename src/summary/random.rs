//! Randomized traversal.
//!
//! When two digests are merged, absorbing the donor's centroids in sorted
//! order skews the receiving digest's shape, so they are replayed in a random
//! order instead. The randomness is injected through [`RandomIndex`]; any
//! `rand::Rng` qualifies, and tests can plug in scripted sources.

use rand::Rng;
use std::ops::ControlFlow;

use crate::sumtrace;
use crate::summary::store::Summary;

/// Source of uniformly distributed indices.
pub trait RandomIndex {
    /// A uniform integer in `[0, n)`. Callers guarantee `n > 0`.
    fn index_below(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomIndex for R {
    #[inline]
    fn index_below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Inside-out Fisher–Yates: a uniformly random permutation of `[0, n)`.
pub(crate) fn permutation<R: RandomIndex + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut m = vec![0usize; n];
    for i in 1..n {
        let j = rng.index_below(i + 1);
        m[i] = m[j];
        m[j] = i;
    }
    m
}

impl Summary {
    /// Visit `(mean, count)` in a random order drawn from `rng`, until the visitor breaks.
    pub fn perm<R, B, F>(&self, rng: &mut R, mut visit: F) -> ControlFlow<B>
    where
        R: RandomIndex + ?Sized,
        F: FnMut(f64, u64) -> ControlFlow<B>,
    {
        for i in permutation(rng, self.len()) {
            visit(self.means[i], self.counts[i])?;
        }
        ControlFlow::Continue(())
    }

    /// Shuffle the storage itself (Fisher–Yates).
    ///
    /// The summary is **no longer sorted** afterwards: only use it as a source of
    /// points for another summary (`get_data_copy`, `iter`, `for_each`), or call
    /// [`Summary::sort_by_mean`] before querying it again.
    pub fn shuffle<R: RandomIndex + ?Sized>(&mut self, rng: &mut R) {
        sumtrace!("shuffle: len={}", self.len());
        for i in (1..self.len()).rev() {
            let j = rng.index_below(i + 1);
            self.swap(i, j);
        }
    }
}
