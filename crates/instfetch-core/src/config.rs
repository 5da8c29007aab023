use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// User-agent sent with every request unless overridden in config.toml.
pub const DEFAULT_USER_AGENT: &str = "nxdrive test script";

/// Write buffer size used while streaming an artifact to disk.
pub const DEFAULT_CHUNK_SIZE: usize = 1_000_000;

/// Global configuration loaded from `~/.config/instfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// `User-Agent` header for listing and artifact requests.
    pub user_agent: String,
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Optional cap on a whole transfer in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Bytes buffered before each write to the destination file.
    pub chunk_size: usize,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 30,
            timeout_secs: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_redirections: 10,
        }
    }
}

impl FetchConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            user_agent: self.user_agent.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            max_redirections: self.max_redirections,
            // A zero-sized buffer would turn every callback into a syscall.
            chunk_size: self.chunk_size.max(1),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("instfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
