//! Ordered centroid storage for t-digest style quantile sketches.
//!
//! [`Summary`] keeps `(mean, count)` pairs sorted by mean and answers the
//! positional and cumulative-weight questions a digest asks while it merges
//! and compresses. Merge policy, scale functions and quantile estimation live
//! in the digest, not here.

mod error;
pub mod summary;

pub use error::{SummaryError, SummaryResult};
pub use summary::{
    Centroid, FloorSum, RandomIndex, Summary, SummaryBuilder, SummaryData, SummaryOptions,
    LINEAR_SEARCH_LIMIT,
};

use std::sync::OnceLock;

#[doc(hidden)]
pub fn trace_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("SUMMARY_TRACE").is_some())
}

// Opt-in tracing (cheap unless env var set)
#[macro_export]
macro_rules! sumtrace {
    ($($arg:tt)*) => {
        if $crate::trace_enabled() {
            eprintln!($($arg)*);
        }
    }
}
