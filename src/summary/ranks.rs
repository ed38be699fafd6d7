//! Rank and cumulative-weight queries.
//!
//! These map between *value space* (means) and *rank space* (running count
//! totals). `head_sum` is the hot one: the digest calls it around every
//! insertion while deciding whether a neighbour has room to absorb a value.

use crate::summary::search::find_index;
use crate::summary::store::Summary;

/// Result of [`Summary::floor_sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloorSum {
    /// Last index whose preceding cumulative count is `<= sum`; `None` when no
    /// centroid qualifies (empty summary, or a negative / NaN target).
    pub index: Option<usize>,
    /// Cumulative count strictly before `index` (`head_sum(index)`), `0` for `None`.
    pub cum_sum: u64,
}

impl Summary {
    /// Sum of counts over `[0, idx)`. Panics when `idx > len()`.
    ///
    /// Wraps modulo 2^64 if the counts exceed `u64::MAX`, in every build profile.
    #[inline]
    pub fn head_sum(&self, idx: usize) -> u64 {
        sum_until_index(&self.counts, idx)
    }

    /// Sum of every count. O(n); reporting only, not the hot path.
    ///
    /// Wraps modulo 2^64 like [`Summary::head_sum`].
    pub fn total_count(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.wrapping_add(c))
    }

    /// Index of the last centroid whose mean is strictly below `x`.
    #[inline]
    pub fn floor(&self, x: f64) -> Option<usize> {
        find_index(&self.means, x).checked_sub(1)
    }

    /// Last index whose preceding cumulative count is `<= sum`, plus that
    /// cumulative count. Linear scan; stops at the first index that overshoots.
    ///
    /// A running total that would pass `u64::MAX` counts as an overshoot, so the
    /// reported `cum_sum` never wraps.
    pub fn floor_sum(&self, sum: f64) -> FloorSum {
        let mut found = FloorSum::default();
        let mut cum: u64 = 0;
        for (i, &count) in self.counts.iter().enumerate() {
            if (cum as f64) <= sum {
                found = FloorSum {
                    index: Some(i),
                    cum_sum: cum,
                };
            } else {
                break;
            }
            match cum.checked_add(count) {
                Some(next) => cum = next,
                None => break,
            }
        }
        found
    }
}

// A simple loop unroll saves a surprising amount of time.
#[inline]
fn sum_until_index(counts: &[u64], idx: usize) -> u64 {
    let head = &counts[..idx];
    let mut lanes = [0u64; 4];
    let mut chunks = head.chunks_exact(4);
    for c in &mut chunks {
        lanes[0] = lanes[0].wrapping_add(c[0]);
        lanes[1] = lanes[1].wrapping_add(c[1]);
        lanes[2] = lanes[2].wrapping_add(c[2]);
        lanes[3] = lanes[3].wrapping_add(c[3]);
    }
    let tail = chunks
        .remainder()
        .iter()
        .fold(0u64, |acc, &c| acc.wrapping_add(c));
    lanes
        .iter()
        .fold(tail, |acc, &lane| acc.wrapping_add(lane))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::search::LINEAR_SEARCH_LIMIT;

    fn summary_of(points: &[(f64, u64)]) -> Summary {
        let mut s = Summary::new(points.len());
        for &(m, c) in points {
            s.add(m, c).expect("valid point");
        }
        s
    }

    #[test]
    fn unrolled_prefix_matches_plain_sum() {
        let counts: Vec<u64> = (1..=37).map(|i| (i * 13 % 7 + 1) as u64).collect();
        for idx in 0..=counts.len() {
            let plain: u64 = counts[..idx].iter().sum();
            assert_eq!(sum_until_index(&counts, idx), plain, "idx={idx}");
        }
    }

    #[test]
    #[should_panic]
    fn head_sum_past_len_panics() {
        let s = summary_of(&[(1.0, 1)]);
        let _ = s.head_sum(2);
    }

    #[test]
    fn scenario_head_sum_floor_floor_sum() {
        let s = summary_of(&[(5.0, 1), (3.0, 2), (3.0, 1)]);
        assert_eq!(s.head_sum(0), 0);
        assert_eq!(s.head_sum(2), 3);
        assert_eq!(s.head_sum(3), 4);
        assert_eq!(s.total_count(), 4);

        assert_eq!(s.floor(4.0), Some(1));
        assert_eq!(s.floor(3.0), None, "strictly-less excludes equal means");
        assert_eq!(s.floor(5.0), Some(1));
        assert_eq!(s.floor(5.5), Some(2));

        assert_eq!(
            s.floor_sum(2.0),
            FloorSum {
                index: Some(1),
                cum_sum: 2
            }
        );
    }

    #[test]
    fn floor_sum_boundaries() {
        let s = summary_of(&[(1.0, 2), (2.0, 3), (3.0, 5)]);
        // Preceding sums: 0, 2, 5.
        assert_eq!(s.floor_sum(0.0).index, Some(0));
        assert_eq!(s.floor_sum(1.999).index, Some(0));
        assert_eq!(s.floor_sum(2.0).index, Some(1));
        assert_eq!(s.floor_sum(4.5), FloorSum { index: Some(1), cum_sum: 2 });
        assert_eq!(s.floor_sum(5.0), FloorSum { index: Some(2), cum_sum: 5 });
        assert_eq!(s.floor_sum(1e9), FloorSum { index: Some(2), cum_sum: 5 });
    }

    #[test]
    fn floor_sum_negative_or_nan_target_finds_nothing() {
        let s = summary_of(&[(1.0, 2), (2.0, 3)]);
        assert_eq!(s.floor_sum(-0.5), FloorSum::default());
        assert_eq!(s.floor_sum(f64::NAN), FloorSum::default());
    }

    #[test]
    fn floor_sum_ignores_the_total_past_the_last_index() {
        let s = summary_of(&[(1.0, 1), (2.0, u64::MAX)]);
        assert_eq!(
            s.floor_sum(10.0),
            FloorSum {
                index: Some(1),
                cum_sum: 1
            }
        );
    }

    #[test]
    fn floor_sum_stops_where_the_running_total_would_overflow() {
        let s = summary_of(&[(1.0, u64::MAX), (2.0, 1), (3.0, 1)]);
        // Preceding totals: 0, u64::MAX, then past u64::MAX.
        let fs = s.floor_sum(f64::MAX);
        assert_eq!(
            fs,
            FloorSum {
                index: Some(1),
                cum_sum: u64::MAX
            }
        );
        assert_eq!(fs.cum_sum, s.head_sum(1));
    }

    #[test]
    fn totals_wrap_past_u64_max() {
        let s = summary_of(&[(1.0, u64::MAX), (2.0, 1), (3.0, 2)]);
        assert_eq!(s.total_count(), 2);
        assert_eq!(s.head_sum(1), u64::MAX);
        assert_eq!(s.head_sum(2), 0);
        assert_eq!(s.head_sum(3), 2);

        // Same through the unrolled lanes.
        let counts = [u64::MAX, 1, 1, 1, u64::MAX, 3];
        assert_eq!(sum_until_index(&counts, 4), 2);
        assert_eq!(sum_until_index(&counts, 6), 4);
    }

    #[test]
    fn empty_summary_queries() {
        let s = Summary::new(16);
        assert_eq!(s.total_count(), 0);
        assert_eq!(s.head_sum(0), 0);
        assert_eq!(s.floor(0.0), None);
        assert_eq!(s.floor_sum(10.0), FloorSum { index: None, cum_sum: 0 });
    }

    #[test]
    fn floor_matches_between_search_regimes() {
        let n = LINEAR_SEARCH_LIMIT + 50;
        let mut big = Summary::new(n);
        for i in 0..n {
            big.add((i / 2) as f64, 1).unwrap();
        }
        // A short summary with the same leading means answers identically.
        let mut small = Summary::new(LINEAR_SEARCH_LIMIT - 1);
        for i in 0..LINEAR_SEARCH_LIMIT - 1 {
            small.add((i / 2) as f64, 1).unwrap();
        }
        for k in 0..100 {
            let x = k as f64 + 0.5;
            assert_eq!(big.floor(x), small.floor(x), "x={x}");
            assert_eq!(big.floor(k as f64), small.floor(k as f64), "x={k}");
        }
    }

    #[test]
    fn floor_sum_cum_sum_is_head_sum() {
        let s = summary_of(&[(0.0, 4), (1.0, 1), (1.0, 7), (2.0, 2), (9.0, 3)]);
        for t in 0..=20 {
            let fs = s.floor_sum(t as f64);
            let idx = fs.index.expect("non-negative target on non-empty summary");
            assert_eq!(fs.cum_sum, s.head_sum(idx), "t={t}");
            assert!(fs.cum_sum as f64 <= t as f64);
            if idx + 1 < s.len() {
                assert!(s.head_sum(idx + 1) as f64 > t as f64, "t={t} not the last");
            }
        }
    }
}
