pub mod batch;
mod de;
pub mod error;
pub mod http;
pub mod radarr;
pub mod sonarr;
pub mod timestamp;
pub mod traits;

pub use batch::CalendarBatch;
pub use error::{SkipReason, SourceError};
pub use http::build_http_client;
pub use radarr::RadarrClient;
pub use sonarr::SonarrClient;
pub use traits::{CalendarSource, MovieLibrary, SeriesLibrary};

#[cfg(test)]
mod test_support;
