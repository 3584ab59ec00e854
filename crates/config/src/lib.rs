//! Configuration models and loaders for rocket builder catalogs.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One builder entry from a catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct BuilderConfig {
    pub name: String,
    pub layout: StagingConfig,
}

/// Stage layout of a builder.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum StagingConfig {
    /// One solid motor sized to the payload.
    #[serde(rename = "sounding")]
    Sounding,
    /// Liquid stages added band by band as payload weight grows.
    #[serde(rename = "freight")]
    Freight { bands: Vec<BandConfig> },
    #[serde(other)]
    Unsupported,
}

/// Capacity band of a freight layout.
#[derive(Debug, Deserialize, Clone)]
pub struct BandConfig {
    pub name: String,
    /// Heaviest payload this band can lift on its own share.
    pub max_payload: f64,
    pub engine_count: usize,
    /// Fixed per-engine thrust; when absent the stage thrust tracks payload weight.
    #[serde(default)]
    pub engine_thrust: Option<f64>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load builder configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_builder_configs<P: AsRef<Path>>(path: P) -> Result<Vec<BuilderConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
