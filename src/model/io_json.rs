//! Reading and writing page configurations.
//!
//! JSON is the format the page editor stores; YAML is accepted on input for
//! hand-written fixtures and demos.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::configuration::Configuration;
use crate::error::LinkmapError;

/// Reads a configuration from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_json(path: &Path) -> Result<Configuration, LinkmapError> {
    let file = File::open(path).map_err(LinkmapError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LinkmapError::ConfigJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a configuration from a YAML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_yaml(path: &Path) -> Result<Configuration, LinkmapError> {
    let file = File::open(path).map_err(LinkmapError::Io)?;
    let reader = BufReader::new(file);

    serde_yaml::from_reader(reader).map_err(|source| LinkmapError::ConfigYamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a configuration to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_config_json(path: &Path, config: &Configuration) -> Result<(), LinkmapError> {
    let file = File::create(path).map_err(LinkmapError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, config).map_err(|source| LinkmapError::ConfigJsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a configuration from a JSON string.
pub fn from_json_str(json: &str) -> Result<Configuration, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a configuration from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<Configuration, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Reads a configuration from a YAML string.
pub fn from_yaml_str(yaml: &str) -> Result<Configuration, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Writes a configuration to a pretty-printed JSON string.
pub fn to_json_string(config: &Configuration) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}
