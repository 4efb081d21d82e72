use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the cookie file looked up in the config dir when none is configured.
pub const DEFAULT_COOKIES_FILE: &str = "cookies.txt";

/// Global configuration loaded from `~/.config/reelgrab/config.toml`.
///
/// Every field has a default, so a partial file only overrides what it names.
/// Command-line flags take precedence over all of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelgrabConfig {
    /// Download utility executable, resolved through `PATH`.
    pub utility: String,
    /// Python interpreter used for the `python -m yt_dlp` fallback.
    pub python: String,
    /// Upper bound on a single utility invocation, in seconds.
    pub timeout_secs: u64,
    /// Output directory used when `--output` is not given.
    pub output_dir: PathBuf,
    /// First file number used when `--start` is not given.
    pub start_number: u32,
    /// Netscape cookie file used when neither `--cookies` nor `--browser` is passed.
    pub cookies_file: Option<PathBuf>,
}

impl Default for ReelgrabConfig {
    fn default() -> Self {
        Self {
            utility: "yt-dlp".to_string(),
            python: "python3".to_string(),
            timeout_secs: 120,
            output_dir: PathBuf::from("downloads"),
            start_number: 1,
            cookies_file: None,
        }
    }
}

impl ReelgrabConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("reelgrab")
        .context("locate XDG config dir for reelgrab")?;
    xdg_dirs
        .place_config_file("config.toml")
        .with_context(|| {
            format!(
                "create config dir under {}",
                xdg_dirs.get_config_home().display()
            )
        })
}

/// `cookies.txt` next to `config.toml`, if it exists.
pub fn default_cookies_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("reelgrab")
        .ok()?
        .find_config_file(DEFAULT_COOKIES_FILE)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReelgrabConfig> {
    load_or_init_at(&config_path()?)
}

/// [`load_or_init`] for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<ReelgrabConfig> {
    if !path.exists() {
        let default_cfg = ReelgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReelgrabConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
