pub mod aggregator;
pub mod merge;
pub mod stats;

pub use aggregator::{AggregateError, Aggregator, FeedReport, SourceOutcome};
pub use merge::{compare_items, merge_items};
pub use stats::StatsCollector;
