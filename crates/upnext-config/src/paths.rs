use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get the container base path from environment variable, defaulting to "/app"
pub fn container_base_path() -> PathBuf {
    std::env::var("UPNEXT_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/app"))
}

/// Where UpNext looks for its config file and writes its log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
    container: bool,
}

impl PathManager {
    /// Per-user layout, `~/.config/upnext` on Linux
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("upnext");

        Ok(Self {
            log_dir: base_dir.join("logs"),
            config_dir: base_dir,
            container: false,
        })
    }

    /// Container layout rooted at [`container_base_path`]
    pub fn from_docker_env() -> Self {
        Self::rooted_at(container_base_path())
    }

    fn rooted_at(base: PathBuf) -> Self {
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
            container: true,
        }
    }

    /// True when running inside the container image
    pub fn in_container(&self) -> bool {
        self.container
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Default log destination for the long-running server
    pub fn server_log_file(&self) -> PathBuf {
        self.log_dir.join("upnext.log")
    }

    /// Choose where the server logs.
    ///
    /// An explicit path always wins. Otherwise only a server running in the
    /// container gets a file, under the mounted base path; everything else
    /// logs to stderr alone.
    pub fn log_file_for(&self, explicit: Option<&Path>, serving: bool) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None if serving && self.container => Some(self.server_log_file()),
            None => None,
        }
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // The container image creates the base path, so its presence means we run in Docker
        let base = container_base_path();
        if base.exists() {
            return Self::rooted_at(base);
        }

        Self::new().unwrap_or_else(|_| Self::from_docker_env())
    }
}
