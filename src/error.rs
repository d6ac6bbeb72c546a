use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for linkmap operations.
///
/// Resolution, gesture handling and marker toggling are total. Errors come
/// from file and format handling and from CLI requests naming an area that
/// cannot be edited.
#[derive(Debug, Error)]
pub enum LinkmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration JSON from {path}: {source}")]
    ConfigJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse configuration YAML from {path}: {source}")]
    ConfigYamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write configuration JSON to {path}: {source}")]
    ConfigJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON output: {0}")]
    JsonOutput(#[source] serde_json::Error),

    #[error("Failed to write CSV output: {0}")]
    CsvOutput(#[from] csv::Error),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("No area at index {index} (the page has {count} area(s))")]
    AreaNotFound { index: usize, count: usize },

    #[error("Areas of this page are not editable")]
    AreasNotEditable,
}
