pub mod client;
pub mod models;
pub mod normalize;
pub mod stats;

pub use client::SonarrClient;
pub use normalize::normalize_episode;
pub use stats::summarize_series;
