pub mod centroid;
pub mod test_helpers;

// Internal building blocks
mod builder;
mod random;
mod ranks;
mod search;
mod store;

// Public surface
pub use builder::{SummaryBuilder, SummaryOptions};
pub use centroid::Centroid;
pub use random::RandomIndex;
pub use ranks::FloorSum;
pub use search::LINEAR_SEARCH_LIMIT;
pub use store::{Summary, SummaryData};
