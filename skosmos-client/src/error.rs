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

//! Error types for Skosmos operations.

use std::path::PathBuf;
use thiserror::Error;

/// Skosmos client errors.
#[derive(Error, Debug)]
pub enum SkosmosError {
    /// The endpoint answered 404 for a vocabulary-scoped resource.
    ///
    /// Only `get_vocabulary`, `top_concepts`, `lookup` and `groups` produce
    /// this variant; every other operation reports a 404 as
    /// [`SkosmosError::RequestFailed`].
    #[error("not found: {body}")]
    NotFound { body: String },

    #[error("request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("malformed response: field `{field}` {reason}")]
    MalformedResponse { field: String, reason: String },

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RDF/XML parse error: {0}")]
    Rdf(#[from] oxrdfxml::RdfXmlParseError),

    /// Network-level failure below the library (DNS, connect, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read config file {path:?}: {source}")]
    ConfigFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SkosmosError {
    pub(crate) fn missing_field(field: &str) -> Self {
        Self::MalformedResponse {
            field: field.to_string(),
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn unexpected_shape(field: &str, err: serde_json::Error) -> Self {
        Self::MalformedResponse {
            field: field.to_string(),
            reason: format!("has unexpected shape: {}", err),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SkosmosError::NotFound { .. } => Some(404),
            SkosmosError::RequestFailed { status, .. } => Some(*status),
            SkosmosError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Skosmos operations.
pub type Result<T> = std::result::Result<T, SkosmosError>;
