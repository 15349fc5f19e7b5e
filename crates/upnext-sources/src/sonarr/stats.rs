use upnext_models::{format_tib, SonarrStats};
use crate::sonarr::models::SonarrSeries;

/// Fold the series list into library totals
pub fn summarize_series(series: &[SonarrSeries]) -> SonarrStats {
    let mut stats = SonarrStats::default();
    let mut total_size: u64 = 0;

    for entry in series {
        stats.series += 1;

        let status = entry.status.as_deref();
        if entry.ended.unwrap_or(false) || status == Some("ended") {
            stats.ended += 1;
        } else if status == Some("continuing") {
            stats.continuing += 1;
        }

        if entry.monitored.unwrap_or(false) {
            stats.monitored += 1;
        } else {
            stats.unmonitored += 1;
        }

        if let Some(statistics) = &entry.statistics {
            stats.episodes += statistics.total_episode_count.unwrap_or(0);
            stats.files += statistics.episode_file_count.unwrap_or(0);
            total_size = total_size.saturating_add(statistics.size_on_disk.unwrap_or(0));
        }
    }

    stats.total_file_size = format_tib(total_size);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonarr::models::SonarrSeriesStatistics;

    fn series(ended: Option<bool>, status: &str, monitored: bool, episodes: u64, files: u64, size: u64) -> SonarrSeries {
        SonarrSeries {
            ended,
            status: Some(status.to_string()),
            monitored: Some(monitored),
            statistics: Some(SonarrSeriesStatistics {
                total_episode_count: Some(episodes),
                episode_file_count: Some(files),
                size_on_disk: Some(size),
            }),
        }
    }

    #[test]
    fn test_summarize_series() {
        let tib = 1024u64.pow(4);
        let list = vec![
            series(Some(true), "continuing", true, 10, 10, tib),
            series(None, "ended", false, 20, 5, tib / 2),
            series(Some(false), "continuing", true, 8, 0, 0),
            series(None, "upcoming", true, 0, 0, 0),
        ];

        let stats = summarize_series(&list);
        assert_eq!(stats.series, 4);
        assert_eq!(stats.ended, 2);
        assert_eq!(stats.continuing, 1);
        assert_eq!(stats.monitored, 3);
        assert_eq!(stats.unmonitored, 1);
        assert_eq!(stats.episodes, 38);
        assert_eq!(stats.files, 15);
        assert_eq!(stats.total_file_size, "1.5 TiB");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize_series(&[]), SonarrStats::default());
    }
}
