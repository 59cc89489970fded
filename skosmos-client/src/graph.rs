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

//! RDF graph support
//!
//! Concept data is served as RDF/XML and parsed into an [`oxrdf::Graph`].
//! The helpers here answer the usual questions asked of such a graph,
//! e.g. "which resources have an English `skos:prefLabel`".

use crate::error::Result;
use oxrdf::{Graph, NamedNodeRef, NamedOrBlankNodeRef, Term, TermRef, TripleRef};
use oxrdfxml::RdfXmlParser;

/// SKOS vocabulary terms.
pub mod skos {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2004/02/skos/core#";

    pub const CONCEPT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#Concept");
    pub const CONCEPT_SCHEME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#ConceptScheme");
    pub const PREF_LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
    pub const ALT_LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#altLabel");
    pub const BROADER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#broader");
    pub const NARROWER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#narrower");
    pub const RELATED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#related");
    pub const IN_SCHEME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#inScheme");
}

/// A literal label attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledResource {
    /// IRI of the resource, or `_:id` for a blank node
    pub subject: String,
    pub label: String,
    pub language: Option<String>,
}

/// Parse an RDF/XML document into a graph.
pub fn parse_rdf_xml(body: &[u8]) -> Result<Graph> {
    let mut graph = Graph::new();
    for triple in RdfXmlParser::new().for_reader(body) {
        graph.insert(&triple?);
    }
    Ok(graph)
}

/// All (subject, object) pairs for `predicate`.
pub fn subject_objects<'a>(
    graph: &Graph,
    predicate: impl Into<NamedNodeRef<'a>>,
) -> Vec<(String, Term)> {
    graph
        .triples_for_predicate(predicate)
        .map(|triple| (subject_id(triple), triple.object.into_owned()))
        .collect()
}

/// Literal values of `predicate`, optionally restricted to one language tag.
///
/// Language tags compare case-insensitively. Non-literal objects are skipped.
pub fn labels<'a>(
    graph: &Graph,
    predicate: impl Into<NamedNodeRef<'a>>,
    lang: Option<&str>,
) -> Vec<LabelledResource> {
    graph
        .triples_for_predicate(predicate)
        .filter_map(|triple| {
            let TermRef::Literal(literal) = triple.object else {
                return None;
            };
            if let Some(lang) = lang {
                match literal.language() {
                    Some(tag) if tag.eq_ignore_ascii_case(lang) => {}
                    _ => return None,
                }
            }
            Some(LabelledResource {
                subject: subject_id(triple),
                label: literal.value().to_string(),
                language: literal.language().map(str::to_string),
            })
        })
        .collect()
}

/// Preferred labels (`skos:prefLabel`) in the graph.
pub fn pref_labels(graph: &Graph, lang: Option<&str>) -> Vec<LabelledResource> {
    labels(graph, skos::PREF_LABEL, lang)
}

fn subject_id(triple: TripleRef<'_>) -> String {
    match triple.subject {
        NamedOrBlankNodeRef::NamedNode(node) => node.as_str().to_string(),
        NamedOrBlankNodeRef::BlankNode(node) => format!("_:{}", node.as_str()),
    }
}
