use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::record::OutputShape;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub version: u32,
    pub collection: Collection,
    #[serde(default)]
    pub scan: Scan,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

/// One collection: where its audio lives and where its document goes
#[derive(Debug, Deserialize, Clone)]
pub struct Collection {
    /// Fixed tag written into the document, e.g. `bedroompop`
    pub genre: String,
    pub input_dir: PathBuf,
    pub output: PathBuf,
    /// Prefix of every track url. Defaults to `/<genre>/`
    pub base_url: Option<String>,
    #[serde(default)]
    pub shape: OutputShape,
}

impl Collection {
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("/{}/", self.genre))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Scan {
    /// Audio file extension, compared case-insensitively
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Upper bound on files being read at the same time
    #[serde(default = "default_max_open_files")]
    pub max_open_files: usize,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            follow_symlinks: false,
            max_open_files: default_max_open_files(),
        }
    }
}

fn default_extension() -> String {
    "mp3".to_string()
}

fn default_max_open_files() -> usize {
    8
}
