//! Configuration file loading (pagelift.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (pagelift.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize)]
pub struct PagesConfig {
    /// Pages directory relative to the project root; auto-detected when unset
    #[serde(default)]
    pub dir: Option<String>,

    /// Index file relative to the project root
    #[serde(default = "default_index")]
    pub index: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildConfig {
    /// Bundler output directory
    #[serde(default = "default_output")]
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open browser when the dev server starts
    #[serde(default = "default_open")]
    pub open: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            index: default_index(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: default_open(),
        }
    }
}

fn default_index() -> String {
    pagelift_pages::DEFAULT_INDEX_FILE.to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_open() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
