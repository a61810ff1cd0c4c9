//! Curve data providers and the one-shot load that turns their payload into
//! a [`CurveStore`].

mod client;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{LoadError, ProviderError};
use crate::store::CurveStore;

pub use client::HttpProvider;

/// Source of raw curve data.
pub trait CurveDataProvider {
    /// Where the data comes from, for messages and reports.
    fn describe(&self) -> String;

    /// Fetch the raw nested mapping of hazard → category → x/y arrays.
    fn fetch(&self) -> Result<Value, ProviderError>;
}

/// Reads curve data from a local JSON file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CurveDataProvider for FileProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Value, ProviderError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ProviderError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ProviderError::Json {
            origin: self.describe(),
            source,
        })
    }
}

/// Pick a provider for `source`: HTTP(S) URLs go over the network, anything
/// else is read as a file path.
pub fn provider_for(source: &str, timeout: Duration) -> Box<dyn CurveDataProvider> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Box::new(HttpProvider::new(source, timeout))
    } else {
        Box::new(FileProvider::new(source))
    }
}

/// Outcome of the single load attempt.
///
/// A failed load never leaves a partial store behind: queries either see the
/// whole store or the reason it is missing.
#[derive(Debug)]
pub enum CurveData {
    Ready {
        store: CurveStore,
        source: String,
        loaded_at: DateTime<Utc>,
    },
    Unavailable(LoadError),
}

impl CurveData {
    pub fn load(provider: &dyn CurveDataProvider) -> Self {
        let source = provider.describe();
        match fetch_store(provider) {
            Ok(store) => {
                info!(%source, "curve data loaded");
                Self::Ready {
                    store,
                    source,
                    loaded_at: Utc::now(),
                }
            }
            Err(err) => {
                warn!(%source, error = %err, "curve data unavailable");
                Self::Unavailable(err)
            }
        }
    }

    pub fn store(&self) -> Result<&CurveStore, &LoadError> {
        match self {
            Self::Ready { store, .. } => Ok(store),
            Self::Unavailable(err) => Err(err),
        }
    }
}

fn fetch_store(provider: &dyn CurveDataProvider) -> Result<CurveStore, LoadError> {
    let raw = provider.fetch()?;
    Ok(CurveStore::load(&raw)?)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
