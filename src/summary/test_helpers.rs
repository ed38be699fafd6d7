//! Labelled assertions and scripted randomness shared by unit and integration tests.

use crate::summary::random::RandomIndex;
use crate::summary::store::Summary;
use ordered_float::OrderedFloat;

pub fn assert_sorted(label: &str, s: &Summary) {
    assert_monotone_chain(label, s.means());
}

pub fn assert_monotone_chain(label: &str, values: &[f64]) {
    for i in 1..values.len() {
        assert!(
            values[i] >= values[i - 1],
            "{}: non-monotone at i={}: {} < {}",
            label,
            i,
            values[i],
            values[i - 1]
        );
    }
}

pub fn assert_columns(label: &str, s: &Summary, means: &[f64], counts: &[u64]) {
    assert_eq!(s.means(), means, "{}: means", label);
    assert_eq!(s.counts(), counts, "{}: counts", label);
}

/// Same `(mean, count)` multiset, in any order.
pub fn assert_same_points(label: &str, got: &[(f64, u64)], expected: &[(f64, u64)]) {
    let key = |ps: &[(f64, u64)]| {
        let mut v: Vec<(OrderedFloat<f64>, u64)> =
            ps.iter().map(|&(m, c)| (OrderedFloat(m), c)).collect();
        v.sort_unstable();
        v
    };
    assert_eq!(
        key(got),
        key(expected),
        "{}: point multisets differ ({} vs {} points)",
        label,
        got.len(),
        expected.len()
    );
}

/// Deterministic [`RandomIndex`]: replays a script, reducing each entry modulo `n`.
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    pos: usize,
    top: bool,
}

impl ScriptedIndices {
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "ScriptedIndices needs at least one entry");
        Self {
            script,
            pos: 0,
            top: false,
        }
    }

    /// Always answers `n - 1`.
    pub fn top() -> Self {
        Self {
            script: vec![0],
            pos: 0,
            top: true,
        }
    }
}

impl RandomIndex for ScriptedIndices {
    fn index_below(&mut self, n: usize) -> usize {
        if self.top {
            return n - 1;
        }
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        v % n
    }
}
