use std::fs::OpenOptions;
use std::io::{Error, ErrorKind, Result};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_filename;

pub fn downloads_dir() -> PathBuf {
    PathBuf::from("downloads")
}

pub fn default_output_dir(assignment: &str) -> PathBuf {
    downloads_dir().join(sanitize_filename(assignment))
}

pub fn config_file() -> PathBuf {
    PathBuf::from("turnin.json")
}

/// Optional per-directory defaults, read from `turnin.json` when present.
/// CLI flags take precedence over these.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CollectConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

pub fn read_config() -> Result<CollectConfig> {
    if !config_file().is_file() {
        return Ok(CollectConfig::default());
    }
    let file = OpenOptions::new().read(true).open(config_file())?;
    serde_json::from_reader(file).map_err(|e| {
        Error::new(
            ErrorKind::Other,
            format!("Failed to parse {}: {}", config_file().display(), e),
        )
    })
}
