pub mod feed;
pub mod item;
pub mod stats;

pub use feed::{DateGroup, Feed};
pub use item::{Item, SourceKind, RELEASE_DATETIME_FORMAT};
pub use stats::{format_tib, LibraryStats, RadarrStats, SonarrStats};
