use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A centroid summarizes a cluster of raw values by its weighted midpoint.
///
/// This is the *value view* handed out by [`Summary`](super::Summary) iteration and
/// checked access; the summary itself stores means and counts in separate columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Centroid {
    mean: OrderedFloat<f64>,
    count: u64,
}

impl PartialOrd for Centroid {
    fn partial_cmp(&self, other: &Centroid) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Centroid {
    fn cmp(&self, other: &Centroid) -> Ordering {
        // Mean first; count only breaks ties so Ord agrees with Eq.
        self.mean
            .cmp(&other.mean)
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl From<(f64, u64)> for Centroid {
    #[inline]
    fn from((mean, count): (f64, u64)) -> Self {
        Centroid::new(mean, count)
    }
}

impl From<Centroid> for (f64, u64) {
    #[inline]
    fn from(c: Centroid) -> Self {
        (c.mean(), c.count())
    }
}

impl Centroid {
    #[inline]
    pub fn new(mean: f64, count: u64) -> Self {
        debug_assert!(count > 0);
        Centroid {
            mean: OrderedFloat::from(mean),
            count,
        }
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean.into_inner()
    }
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fold `(mean, count)` into this cluster and return the combined centroid.
    ///
    /// The digest uses this to compute the replacement it hands to
    /// [`Summary::set_at`](super::Summary::set_at).
    #[inline]
    pub fn merged_with(self, mean: f64, count: u64) -> Centroid {
        let c0 = self.count as f64;
        let c1 = count as f64;
        let total = self.count + count;
        // Incremental form keeps identical means exact.
        let m = self.mean() + (mean - self.mean()) * (c1 / (c0 + c1));
        Centroid::new(m, total)
    }
}
