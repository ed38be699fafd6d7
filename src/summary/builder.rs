use crate::sumtrace;
use crate::summary::store::{Summary, SummaryData};
use crate::{SummaryError, SummaryResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Initial capacity hint (centroids).
    pub capacity: usize,
}

/// Builder for [`Summary`].
///
/// Use the builder when you want to:
/// - construct an empty summary with a chosen capacity, or
/// - seed a summary with *existing columns* (e.g. decoded from storage).
#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    capacity: usize,
    // optional seed
    init_data: Option<SummaryData>,
}

impl SummaryBuilder {
    /// Create a new builder with defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity hint.
    #[inline]
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = n;
        self
    }

    /// Take every setting from `opts`.
    #[inline]
    pub fn options(mut self, opts: SummaryOptions) -> Self {
        self.capacity = opts.capacity;
        self
    }

    /// Seed with paired columns; they need not be sorted.
    pub fn with_data(mut self, means: Vec<f64>, counts: Vec<u64>) -> Self {
        self.init_data = Some(SummaryData { means, counts });
        self
    }

    /// Build the summary, validating and sorting the seed if one was provided.
    pub fn build(self) -> SummaryResult<Summary> {
        let Some(SummaryData { means, counts }) = self.init_data else {
            return Ok(Summary::new(self.capacity));
        };

        if means.len() != counts.len() {
            return Err(SummaryError::LengthMismatch {
                means: means.len(),
                counts: counts.len(),
            });
        }
        if means.iter().any(|m| m.is_nan()) {
            return Err(SummaryError::NaNInput {
                context: "seed mean",
            });
        }
        if counts.iter().any(|&c| c == 0) {
            return Err(SummaryError::ZeroCount {
                context: "seed count",
            });
        }

        let mut s = Summary::new(self.capacity.max(means.len()));
        s.means.extend_from_slice(&means);
        s.counts.extend_from_slice(&counts);
        let presorted = s.is_sorted();
        s.sort_by_mean();
        sumtrace!("seed: n={} presorted={}", s.len(), presorted);
        Ok(s)
    }
}

impl Summary {
    /// Entry point for fluent construction.
    #[inline]
    pub fn builder() -> SummaryBuilder {
        SummaryBuilder::default()
    }

    /// Empty summary configured from `opts`.
    #[inline]
    pub fn with_options(opts: SummaryOptions) -> Summary {
        Summary::new(opts.capacity)
    }

    /// Rebuild a summary from columns (the inverse of [`Summary::get_data_copy`]).
    pub fn from_data(means: Vec<f64>, counts: Vec<u64>) -> SummaryResult<Summary> {
        Self::builder().with_data(means, counts).build()
    }
}

impl TryFrom<SummaryData> for Summary {
    type Error = SummaryError;

    fn try_from(data: SummaryData) -> SummaryResult<Summary> {
        Summary::from_data(data.means, data.counts)
    }
}
