pub mod client;
pub mod models;
pub mod normalize;
pub mod stats;

pub use client::RadarrClient;
pub use normalize::normalize_movie;
pub use stats::summarize_movies;
