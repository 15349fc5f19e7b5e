use upnext_models::{format_tib, RadarrStats};
use crate::radarr::models::RadarrMovie;

/// Fold the movie list into library totals
pub fn summarize_movies(movies: &[RadarrMovie]) -> RadarrStats {
    let mut stats = RadarrStats::default();
    let mut total_size: u64 = 0;

    for movie in movies {
        stats.movies += 1;
        if movie.has_file.unwrap_or(false) {
            stats.movie_files += 1;
        }
        if movie.monitored.unwrap_or(false) {
            stats.monitored += 1;
        } else {
            stats.unmonitored += 1;
        }
        total_size = total_size.saturating_add(movie.size_on_disk.unwrap_or(0));
    }

    stats.total_file_size = format_tib(total_size);
    stats
}
