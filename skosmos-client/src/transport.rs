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

//! HTTP transport abstraction
//!
//! The client only needs "GET with query parameters, give me status and
//! body". [`HttpTransport`] provides that over a blocking reqwest client.

use crate::config::ClientConfig;
use crate::error::Result;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;

/// Status code and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Trait for the HTTP layer used by the Skosmos client.
///
/// Implementations must report network-level failures as errors and hand
/// back every HTTP response, whatever its status, as a [`RawResponse`].
pub trait Transport: Send + Sync {
    /// Issue a GET request to `url` with the given query parameters.
    fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse>;
}

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    /// Build a transport honoring the configured timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http_client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse> {
        let response = self.http_client.get(url).query(params).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
