use upnext_core::{Aggregator, StatsCollector};

/// Read-only after startup; cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Aggregator,
    pub stats: StatsCollector,
}

impl AppState {
    pub fn new(aggregator: Aggregator, stats: StatsCollector) -> Self {
        Self { aggregator, stats }
    }
}
