use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Crates whose events `-v` turns up to debug
const UPNEXT_TARGETS: [&str; 4] = ["upnext", "upnext_core", "upnext_sources", "upnext_config"];

/// Filter for the verbosity flags when `RUST_LOG` is unset.
///
/// 0 = info, 1 = debug for UpNext's own crates, 2 = debug everywhere except
/// hyper's connection chatter, 3+ = trace.
pub fn filter_directives(verbose_level: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => "info".to_string(),
        1 => {
            let own: Vec<String> = UPNEXT_TARGETS.iter().map(|t| format!("{}=debug", t)).collect();
            format!("info,{}", own.join(","))
        }
        2 => "debug,hyper=info,hyper_util=info,reqwest::connect=info".to_string(),
        _ => "trace".to_string(),
    }
}

/// Split a log path into the directory and the prefix the daily appender rotates on.
///
/// `logs/upnext.log` rotates as `logs/upnext.2026-01-17`.
fn rolling_target(log_path: &Path) -> Result<(&Path, &str)> {
    let log_dir = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;
    let prefix = file_name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file_name);
    Ok((log_dir, prefix))
}

/// Install the global subscriber.
///
/// Events always go to stderr (JSON unless attached to a terminal, or as
/// `RUST_LOG_JSON` says). With a log file, the same events are also written
/// there as JSON lines so they survive container restarts.
pub fn init_logging(verbose_level: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new(filter_directives(verbose_level, quiet))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose_level, quiet)))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stderr().is_terminal());

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let stderr_layer = fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
    if json {
        layers.push(stderr_layer.json().boxed());
    } else {
        layers.push(stderr_layer.boxed());
    }

    if let Some(log_path) = &log_file {
        let (log_dir, prefix) = rolling_target(log_path)?;
        std::fs::create_dir_all(log_dir)?;
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, prefix);

        layers.push(
            fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender)
                .boxed(),
        );
    }

    Registry::default().with(layers).with(filter).init();

    if let Some(log_path) = log_file {
        tracing::debug!(operation = "logging_init", log_file = %log_path.display(), "Writing logs to file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_verbosity() {
        assert_eq!(filter_directives(3, true), "error");
    }

    #[test]
    fn test_single_verbose_only_raises_own_crates() {
        let directives = filter_directives(1, false);
        assert!(directives.starts_with("info,"));
        for target in UPNEXT_TARGETS {
            assert!(directives.contains(&format!("{}=debug", target)));
        }
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_verbosity_levels_parse() {
        for level in 0..4 {
            assert!(EnvFilter::try_new(filter_directives(level, false)).is_ok());
        }
        assert_eq!(filter_directives(0, false), "info");
        assert_eq!(filter_directives(5, false), "trace");
    }

    #[test]
    fn test_rolling_target_strips_extension() {
        let path = PathBuf::from("/app/logs/upnext.log");
        let (dir, prefix) = rolling_target(&path).unwrap();
        assert_eq!(dir, Path::new("/app/logs"));
        assert_eq!(prefix, "upnext");
    }

    #[test]
    fn test_rolling_target_bare_file_name() {
        let path = PathBuf::from("server");
        let (dir, prefix) = rolling_target(&path).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(prefix, "server");
    }
}
