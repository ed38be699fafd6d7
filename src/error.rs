// src/error.rs
use core::fmt;

/// Library-wide error for gr-summary.
///
/// Every variant is an input-validation failure raised *before* any mutation,
/// so a summary that returned an error is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryError {
    /// A centroid mean was NaN.
    /// `context` pinpoints where it came from (e.g., "centroid mean", "seed mean").
    NaNInput { context: &'static str },

    /// A centroid count was zero; every stored centroid carries weight.
    ZeroCount { context: &'static str },

    /// Bulk seeding got means and counts of different lengths.
    LengthMismatch { means: usize, counts: usize },
}

impl SummaryError {
    /// `true` for the errors `Summary::add` can raise (bad mean or bad count).
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SummaryError::NaNInput { .. } | SummaryError::ZeroCount { .. }
        )
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::NaNInput { context } => write!(
                f,
                "summary: NaN values are not allowed (got {}). \
hint: drop NaNs before feeding the digest",
                context
            ),
            SummaryError::ZeroCount { context } => write!(
                f,
                "summary: count must be > 0 (got {}). \
hint: skip empty clusters instead of inserting them",
                context
            ),
            SummaryError::LengthMismatch { means, counts } => write!(
                f,
                "summary: means/counts length mismatch ({} means vs {} counts). \
hint: both columns must describe the same centroids",
                means, counts
            ),
        }
    }
}

impl std::error::Error for SummaryError {}

pub type SummaryResult<T> = Result<T, SummaryError>;
