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

//! Skosmos Client
//!
//! Blocking client for the vocabulary-level operations of the Skosmos REST
//! API. Concept-level operations live on [`ConceptHandle`].

use crate::concept::ConceptHandle;
use crate::config::ClientConfig;
use crate::error::{Result, SkosmosError};
use crate::graph::parse_rdf_xml;
use crate::transport::{HttpTransport, RawResponse, Transport};
use crate::types::{push_opt, Params, SearchOptions};
use oxrdf::Graph;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Media type requested from the `data` endpoint.
pub const RDF_XML: &str = "application/rdf+xml";

/// How a 404 answer is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotFoundPolicy {
    /// 404 becomes [`SkosmosError::NotFound`]
    Distinguish,
    /// 404 is a plain [`SkosmosError::RequestFailed`]
    Generic,
}

/// Issue one GET and turn non-2xx answers into errors.
pub(crate) fn fetch<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    params: &[(&str, String)],
    not_found: NotFoundPolicy,
) -> Result<RawResponse> {
    debug!("GET {} ({} params)", url, params.len());
    let response = transport.get(url, params)?;

    if response.is_success() {
        return Ok(response);
    }

    warn!("Skosmos returned HTTP {} for {}", response.status, url);
    let body = response.text();
    if response.status == 404 && not_found == NotFoundPolicy::Distinguish {
        return Err(SkosmosError::NotFound { body });
    }
    Err(SkosmosError::RequestFailed {
        status: response.status,
        body,
    })
}

/// Decode a JSON body and take one top-level field out of it.
pub(crate) fn extract<V: DeserializeOwned>(response: &RawResponse, field: &str) -> Result<V> {
    let mut body: Value = response.json()?;
    let value = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| SkosmosError::missing_field(field))?;
    serde_json::from_value(value).map_err(|e| SkosmosError::unexpected_shape(field, e))
}

/// Skosmos client for vocabulary-level operations.
///
/// # Example
///
/// ```no_run
/// use skosmos_client::{ClientConfig, SearchOptions, VocabularyClient};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = VocabularyClient::new(ClientConfig::default())?;
///
///     for vocab in client.vocabularies("en")? {
///         println!("{} {}", vocab["id"], vocab["title"]);
///     }
///
///     let hits = client.search(
///         "cosmolog*",
///         &SearchOptions::new().with_lang("en").with_vocabs("yso"),
///     )?;
///     println!("{} hits", hits.len());
///     Ok(())
/// }
/// ```
pub struct VocabularyClient<T: Transport = HttpTransport> {
    api_base: String,
    transport: Arc<T>,
}

impl VocabularyClient<HttpTransport> {
    /// Create a client over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validated()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            api_base: config.api_base,
            transport: Arc::new(transport),
        })
    }

    /// Create a client for `api_base` with default settings otherwise.
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_base))
    }
}

impl<T: Transport> VocabularyClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            api_base: config.api_base,
            transport: Arc::new(transport),
        })
    }

    /// The API base every request path is appended to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn get_field<V: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        not_found: NotFoundPolicy,
        field: &str,
    ) -> Result<V> {
        let response = fetch(self.transport.as_ref(), &self.url(path), params, not_found)?;
        extract(&response, field)
    }

    /// List the vocabularies available on the endpoint, titles in `lang`.
    pub fn vocabularies(&self, lang: &str) -> Result<Vec<Value>> {
        let params: Params = vec![("lang", lang.to_string())];
        self.get_field("vocabularies", &params, NotFoundPolicy::Generic, "vocabularies")
    }

    /// Search for concepts in the selected vocabularies, or in all of them.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Value>> {
        let params = options.to_params(query);
        self.get_field("search", &params, NotFoundPolicy::Generic, "results")
    }

    /// Fetch everything known about `uri` as an RDF graph.
    ///
    /// With a vocabulary ID the data comes from that vocabulary; otherwise
    /// the endpoint decides which vocabulary answers. Any non-2xx status,
    /// 404 included, is a [`SkosmosError::RequestFailed`].
    pub fn data(&self, uri: &str, vocid: Option<&str>) -> Result<Graph> {
        let path = match vocid {
            Some(vocid) => format!("{}/data", vocid),
            None => "data".to_string(),
        };
        let params: Params = vec![("uri", uri.to_string()), ("format", RDF_XML.to_string())];

        let response = fetch(
            self.transport.as_ref(),
            &self.url(&path),
            &params,
            NotFoundPolicy::Generic,
        )?;
        let graph = parse_rdf_xml(&response.body)?;
        debug!("Parsed {} triples for {}", graph.len(), uri);
        Ok(graph)
    }

    /// List concept and collection types, globally or within `vocid`.
    pub fn types(&self, lang: &str, vocid: Option<&str>) -> Result<Vec<Value>> {
        let path = match vocid {
            Some(vocid) => format!("{}/types", vocid),
            None => "types".to_string(),
        };
        let params: Params = vec![("lang", lang.to_string())];
        self.get_field(&path, &params, NotFoundPolicy::Generic, "types")
    }

    /// Fetch the metadata of a vocabulary. The whole response body is returned.
    pub fn get_vocabulary(&self, vocid: &str, lang: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        push_opt(&mut params, "lang", lang);

        let response = fetch(
            self.transport.as_ref(),
            &self.url(&format!("{}/", vocid)),
            &params,
            NotFoundPolicy::Distinguish,
        )?;
        response.json()
    }

    /// List the top concepts of a vocabulary, optionally within one concept scheme.
    pub fn top_concepts(
        &self,
        vocid: &str,
        lang: Option<&str>,
        scheme: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut params = Params::new();
        push_opt(&mut params, "lang", lang);
        push_opt(&mut params, "scheme", scheme);
        self.get_field(
            &format!("{}/topConcepts", vocid),
            &params,
            NotFoundPolicy::Distinguish,
            "topconcepts",
        )
    }

    /// Look up concepts by label, best match first.
    ///
    /// With `lang`, only labels in that language are matched.
    pub fn lookup(&self, vocid: &str, label: &str, lang: Option<&str>) -> Result<Vec<Value>> {
        let mut params: Params = vec![("label", label.to_string())];
        push_opt(&mut params, "lang", lang);
        self.get_field(
            &format!("{}/lookup", vocid),
            &params,
            NotFoundPolicy::Distinguish,
            "result",
        )
    }

    /// List the thematic groups of a vocabulary.
    pub fn groups(&self, vocid: &str, lang: Option<&str>) -> Result<Vec<Value>> {
        let mut params = Params::new();
        push_opt(&mut params, "lang", lang);
        self.get_field(
            &format!("{}/groups", vocid),
            &params,
            NotFoundPolicy::Distinguish,
            "groups",
        )
    }

    /// Get a handle for concept-level operations. No request is made.
    pub fn get_concept(&self, vocid: impl Into<String>, uri: impl Into<String>) -> ConceptHandle<T> {
        ConceptHandle::new(
            self.api_base.clone(),
            vocid.into(),
            uri.into(),
            Arc::clone(&self.transport),
        )
    }
}

impl<T: Transport> Clone for VocabularyClient<T> {
    fn clone(&self) -> Self {
        Self {
            api_base: self.api_base.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for VocabularyClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> fmt::Display for VocabularyClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VocabularyClient(api_base='{}')", self.api_base)
    }
}
