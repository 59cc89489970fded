// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration
//!
//! Holds the API endpoint and transport settings. Can be built in code with
//! the `with_*` methods or loaded from a TOML file:
//!
//! ```toml
//! api_base = "http://localhost/Skosmos/rest/v1/"
//! timeout_secs = 10
//! ```
//!
//! `timeout_secs` may be fractional (`timeout_secs = 2.5`).

use crate::error::{Result, SkosmosError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public Finto deployment used when no endpoint is configured.
pub const DEFAULT_API_BASE: &str = "http://api.finto.fi/rest/v1/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Skosmos client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// REST API prefix, always ending in `/` once validated
    pub api_base: String,
    /// Request timeout (default: 30s), `timeout_secs` in TOML
    #[serde(rename = "timeout_secs", with = "timeout_secs")]
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("skosmos-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a configuration for the given API base.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load configuration from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SkosmosError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check the endpoint and return a copy whose `api_base` ends in `/`.
    ///
    /// Every request URL is formed by appending a path to `api_base`, so a
    /// missing trailing slash would glue the last segment to the operation.
    pub fn validated(mut self) -> Result<Self> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(SkosmosError::Config("`api_base` must not be empty".into()));
        }

        let url = reqwest::Url::parse(base)
            .map_err(|e| SkosmosError::Config(format!("invalid `api_base` {:?}: {}", base, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SkosmosError::Config(format!(
                "`api_base` must be an http(s) URL, got scheme {:?}",
                url.scheme()
            )));
        }

        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.api_base = base;

        if self.timeout.is_zero() {
            return Err(SkosmosError::Config("`timeout_secs` must be positive".into()));
        }

        Ok(self)
    }
}

mod timeout_secs {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(timeout.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
