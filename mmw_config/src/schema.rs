use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use mmw_core::{DEFAULT_HEADER_MARKER, PlaylistTemplate};

const CONFIG_DIR: &str = "mmw";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the event logs.
    #[serde(default = "Config::default_data_dir")]
    pub data_dir: PathBuf,
    /// Only read files whose name matches this glob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_glob: Option<String>,
    #[serde(default = "Config::default_header_marker")]
    pub header_marker: String,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub playlist: PlaylistConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            file_glob: None,
            header_marker: Self::default_header_marker(),
            report: ReportConfig::default(),
            playlist: PlaylistConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_limit")]
    pub limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}

impl ReportConfig {
    const fn default_limit() -> usize {
        10
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlaylistConfig {
    #[serde(default = "PlaylistConfig::default_event_name")]
    pub event_name: String,
    #[serde(default = "PlaylistConfig::default_topic_prefix")]
    pub topic_prefix: String,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            event_name: Self::default_event_name(),
            topic_prefix: Self::default_topic_prefix(),
        }
    }
}

impl PlaylistConfig {
    fn default_event_name() -> String {
        PlaylistTemplate::default().event_name
    }

    fn default_topic_prefix() -> String {
        PlaylistTemplate::default().topic_prefix
    }

    #[must_use]
    pub fn template(&self) -> PlaylistTemplate {
        PlaylistTemplate {
            event_name: self.event_name.clone(),
            topic_prefix: self.topic_prefix.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Catalog file; `~/mmw/catalog.json` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Tag added to every synchronized track.
    #[serde(default = "SyncConfig::default_tag")]
    pub tag: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            tag: Self::default_tag(),
        }
    }
}

impl SyncConfig {
    fn default_tag() -> String {
        "metalmittwoch".to_string()
    }

    pub fn resolved_catalog_path(&self) -> anyhow::Result<PathBuf> {
        match &self.catalog_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("catalog.json")),
        }
    }
}

impl Config {
    fn default_data_dir() -> PathBuf {
        PathBuf::from("metalmittwoch")
    }

    fn default_header_marker() -> String {
        DEFAULT_HEADER_MARKER.to_string()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'mmw init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {e}", path.display())
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", path.display())
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` or the default location, falling back to defaults
    /// when the default file does not exist. An explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point data_dir at the directory holding the event logs");
        println!("   2. Run 'mmw stats' to see the most played bands and tracks");
        println!("   3. Run 'mmw sync' to update the playlist catalog");
        println!();
        Ok(())
    }

    /// Write the default configuration to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let config_template = r##"{
  "data_dir": "metalmittwoch",
  "header_marker": "#metalmittwoch",
  "report": {
    "limit": 10
  },
  "playlist": {
    "event_name": "#metalmittwoch",
    "topic_prefix": "Special topic: "
  },
  "sync": {
    "tag": "metalmittwoch"
  }
}
"##;

        std::fs::write(path, config_template)?;
        Ok(())
    }
}
