use serde::Serialize;

/// Library totals reported by Sonarr
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SonarrStats {
    pub series: u64,
    pub ended: u64,
    pub continuing: u64,
    pub monitored: u64,
    pub unmonitored: u64,
    pub episodes: u64,
    pub files: u64,
    pub total_file_size: String,
}

/// Library totals reported by Radarr
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RadarrStats {
    pub movies: u64,
    pub movie_files: u64,
    pub monitored: u64,
    pub unmonitored: u64,
    pub total_file_size: String,
}

/// Combined statistics. `error` lists per-source failures joined with `" | "`;
/// a failed source reports zeroed totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LibraryStats {
    pub sonarr: SonarrStats,
    pub radarr: RadarrStats,
    pub error: Option<String>,
}

impl Default for SonarrStats {
    fn default() -> Self {
        Self {
            series: 0,
            ended: 0,
            continuing: 0,
            monitored: 0,
            unmonitored: 0,
            episodes: 0,
            files: 0,
            total_file_size: format_tib(0),
        }
    }
}

impl Default for RadarrStats {
    fn default() -> Self {
        Self {
            movies: 0,
            movie_files: 0,
            monitored: 0,
            unmonitored: 0,
            total_file_size: format_tib(0),
        }
    }
}

/// Render a byte count as TiB with one decimal, e.g. `"1.5 TiB"`
pub fn format_tib(bytes: u64) -> String {
    let tib = bytes as f64 / 1024f64.powi(4);
    format!("{:.1} TiB", tib)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tib() {
        assert_eq!(format_tib(0), "0.0 TiB");
        assert_eq!(format_tib(1024u64.pow(4) * 3 / 2), "1.5 TiB");
    }

    #[test]
    fn test_defaults_are_zeroed() {
        let stats = LibraryStats {
            sonarr: SonarrStats::default(),
            radarr: RadarrStats::default(),
            error: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["sonarr"]["total_file_size"], "0.0 TiB");
        assert_eq!(json["radarr"]["movies"], 0);
        assert!(json["error"].is_null());
    }
}
