//! Position search over the sorted mean column.
//!
//! Both lookups the summary needs ("first mean `> x`" for insertion, "first
//! mean `>= x`" for [`Summary::floor`](super::Summary::floor)) go through one
//! routine that picks a strategy by size:
//! - **short columns** (`len < LINEAR_SEARCH_LIMIT`): left-to-right scan,
//! - **long columns**: binary search via `slice::partition_point`.
//!
//! The two strategies return identical indices for every input, including
//! NaN probes (no mean is `>`/`>=` NaN, so both return `len`).

/// Crossover between linear scan and binary search.
///
/// Below this many centroids the scan wins on branch prediction and cache
/// locality. Changing it never changes results, only speed.
pub const LINEAR_SEARCH_LIMIT: usize = 250;

/// First index whose mean is strictly greater than `x` (insert-to-the-right).
#[inline]
pub(crate) fn insertion_index(means: &[f64], x: f64) -> usize {
    first_index(means, |m| m > x)
}

/// First index whose mean is `>= x`, or `means.len()` when there is none.
#[inline]
pub(crate) fn find_index(means: &[f64], x: f64) -> usize {
    first_index(means, |m| m >= x)
}

#[inline]
fn first_index(means: &[f64], past: impl Fn(f64) -> bool) -> usize {
    if means.len() < LINEAR_SEARCH_LIMIT {
        scan(means, past)
    } else {
        bisect(means, past)
    }
}

#[inline]
fn scan(means: &[f64], past: impl Fn(f64) -> bool) -> usize {
    means.iter().position(|&m| past(m)).unwrap_or(means.len())
}

#[inline]
fn bisect(means: &[f64], past: impl Fn(f64) -> bool) -> usize {
    // `past` flips false → true exactly once on a sorted column.
    means.partition_point(|&m| !past(m))
}
