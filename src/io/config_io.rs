use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for reading config.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    config_path_with(|key| std::env::var(key).ok())
}

fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let base = env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_with(&env).join(".config"));
    base.join("focus-helper").join("config.toml")
}

fn home_with(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    env("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// Read config from `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the data directory: explicit flag, then config, then XDG data home
pub fn resolve_data_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    resolve_data_dir_with(flag, config, |key| std::env::var(key).ok())
}

fn resolve_data_dir_with(
    flag: Option<&Path>,
    config: &Config,
    env: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.storage.dir {
        return dir.clone();
    }
    env("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_with(&env).join(".local").join("share"))
        .join("focus-helper")
}
