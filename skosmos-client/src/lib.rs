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

//! # Skosmos client for Rust
//!
//! Blocking client for the Skosmos vocabulary REST API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use skosmos_client::{ClientConfig, SearchOptions, VocabularyClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults to the public Finto endpoint
//!     let client = VocabularyClient::new(ClientConfig::default())?;
//!
//!     let results = client.search(
//!         "Stockholm*",
//!         &SearchOptions::new().with_lang("en"),
//!     )?;
//!     for result in results {
//!         println!("{}", result);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Concept data and hierarchy
//!
//! ```no_run
//! use skosmos_client::{graph, ClientConfig, VocabularyClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = VocabularyClient::new(ClientConfig::default())?;
//!
//! let data = client.data("http://www.yso.fi/onto/yso/p7160", None)?;
//! println!("Got {} triples of data", data.len());
//! for label in graph::pref_labels(&data, Some("en")) {
//!     println!("<{}> has label \"{}\"", label.subject, label.label);
//! }
//!
//! let prams = client.get_concept("yso", "http://www.yso.fi/onto/yso/p12345");
//! println!("{}", prams.label(Some("en"))?);
//! for broader in prams.broader(Some("en"))? {
//!     println!("{}", broader);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod concept;
mod config;
mod error;
pub mod graph;
mod transport;
mod types;

#[cfg(test)]
mod testing;

pub use client::{VocabularyClient, RDF_XML};
pub use concept::ConceptHandle;
pub use config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
pub use error::{Result, SkosmosError};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use types::{SearchOptions, VocabSelection, DEFAULT_MAX_HITS};

pub use oxrdf;
