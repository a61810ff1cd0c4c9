//! Error types for loading and querying curve data.
//!
//! Load-time errors end the load attempt and leave the data unavailable.
//! Query-time errors are local to one query and never touch the store.

use std::path::PathBuf;

use thiserror::Error;

/// Raw curve data does not have the expected nested shape.
#[derive(Debug, Error, PartialEq)]
pub enum DataFormatError {
    #[error("expected a JSON object at `{path}`")]
    NotAnObject { path: String },

    #[error("unknown hazard key `{key}` (expected gempa, banjir, gunungberapi or longsor)")]
    UnknownHazard { key: String },

    #[error("missing `{field}` array at `{path}`")]
    MissingField { path: String, field: &'static str },

    #[error("expected an array at `{path}`")]
    NotAnArray { path: String },

    #[error("expected a finite number at `{path}[{index}]`")]
    NotANumber { path: String, index: usize },

    #[error("`{path}` has {x_len} x values but {y_len} y values")]
    LengthMismatch {
        path: String,
        x_len: usize,
        y_len: usize,
    },
}

/// The curve data provider could not deliver anything.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("response from {origin} is not valid JSON: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
}

/// Why a load attempt left the curve data unavailable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("curve data unavailable: {0}")]
    Provider(#[from] ProviderError),

    #[error("malformed curve data: {0}")]
    Format(#[from] DataFormatError),
}

/// Problems resolving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no curve source given (use --source, FRAGILITY_SOURCE or `source` in fragility.toml)")]
    NoSource,

    #[error("timeout_secs must be at least 1")]
    ZeroTimeout,
}

/// Intensity text that does not parse as a finite number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid intensity `{input}`")]
pub struct InvalidQueryInput {
    pub input: String,
}
