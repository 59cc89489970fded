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

//! Concept-level operations.

use crate::client::{extract, fetch, NotFoundPolicy};
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};
use crate::types::{push_opt, Params};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A single concept of one vocabulary.
///
/// Obtained from [`VocabularyClient::get_concept`](crate::VocabularyClient::get_concept).
/// Every operation is `GET <api_base><vocid>/<operation>?uri=<uri>[&lang=..]`.
/// Unlike some vocabulary-level operations, a 404 here is reported as
/// [`SkosmosError::RequestFailed`](crate::SkosmosError::RequestFailed).
pub struct ConceptHandle<T: Transport = HttpTransport> {
    api_base: String,
    vocid: String,
    uri: String,
    transport: Arc<T>,
}

impl<T: Transport> ConceptHandle<T> {
    pub(crate) fn new(api_base: String, vocid: String, uri: String, transport: Arc<T>) -> Self {
        Self {
            api_base,
            vocid,
            uri,
            transport,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn vocabulary_id(&self) -> &str {
        &self.vocid
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    fn get_field<V: DeserializeOwned>(&self, operation: &str, field: &str, lang: Option<&str>) -> Result<V> {
        let url = format!("{}{}/{}", self.api_base, self.vocid, operation);
        let mut params: Params = vec![("uri", self.uri.clone())];
        push_opt(&mut params, "lang", lang);

        let response = fetch(self.transport.as_ref(), &url, &params, NotFoundPolicy::Generic)?;
        extract(&response, field)
    }

    /// Preferred label, in `lang` or the vocabulary default language.
    pub fn label(&self, lang: Option<&str>) -> Result<Value> {
        self.get_field("label", "prefLabel", lang)
    }

    /// Immediate broader concepts.
    pub fn broader(&self, lang: Option<&str>) -> Result<Vec<Value>> {
        self.get_field("broader", "broader", lang)
    }

    /// All broader concepts up to the top of the hierarchy, keyed by URI.
    pub fn broader_transitive(&self, lang: Option<&str>) -> Result<Value> {
        self.get_field("broaderTransitive", "broaderTransitive", lang)
    }

    /// Immediate narrower concepts.
    pub fn narrower(&self, lang: Option<&str>) -> Result<Vec<Value>> {
        self.get_field("narrower", "narrower", lang)
    }

    /// All narrower concepts, keyed by URI.
    pub fn narrower_transitive(&self, lang: Option<&str>) -> Result<Value> {
        self.get_field("narrowerTransitive", "narrowerTransitive", lang)
    }

    /// Associatively related concepts.
    pub fn related(&self, lang: Option<&str>) -> Result<Vec<Value>> {
        self.get_field("related", "related", lang)
    }
}

impl<T: Transport> Clone for ConceptHandle<T> {
    fn clone(&self) -> Self {
        Self {
            api_base: self.api_base.clone(),
            vocid: self.vocid.clone(),
            uri: self.uri.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for ConceptHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConceptHandle")
            .field("api_base", &self.api_base)
            .field("vocid", &self.vocid)
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}
