use std::time::Duration;

use serde_json::Value;

use super::CurveDataProvider;
use crate::error::ProviderError;

/// Fetches curve data with a blocking HTTP GET.
pub struct HttpProvider {
    url: String,
    timeout: Duration,
}

impl HttpProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn http_err(&self, source: reqwest::Error) -> ProviderError {
        ProviderError::Http {
            url: self.url.clone(),
            source,
        }
    }
}

impl CurveDataProvider for HttpProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Value, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.http_err(e))?;
        let resp = client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .map_err(|e| self.http_err(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(|e| self.http_err(e))?;
        serde_json::from_str(&body).map_err(|source| ProviderError::Json {
            origin: self.url.clone(),
            source,
        })
    }
}
