//! YAML configuration file reading and writing.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ConfigError;

/// Load and deserialise a YAML document.
///
/// An empty file deserialises like an empty mapping, so every defaulted
/// field comes back empty rather than failing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialise `value` as block-style YAML and write it to `path`.
///
/// Keys are written in declaration order.
///
/// # Errors
///
/// Returns an error if serialisation or the write fails.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(value).map_err(ConfigError::Serialize)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
