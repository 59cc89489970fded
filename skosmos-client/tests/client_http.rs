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

//! Integration tests against a mock Skosmos endpoint

use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use skosmos_client::{graph, ClientConfig, SearchOptions, SkosmosError, VocabularyClient};

const VOCABULARIES_JSON: &str = include_str!("data/vocabularies.json");
const P7160_RDF: &str = include_str!("data/p7160.rdf");

fn client_for(server: &ServerGuard) -> VocabularyClient {
    VocabularyClient::new(ClientConfig::new(format!("{}/rest/v1/", server.url())))
        .expect("client")
}

/// Listing vocabularies returns exactly the fixture's list
#[test]
fn test_vocabularies_from_fixture() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/v1/vocabularies")
        .match_query(Matcher::UrlEncoded("lang".into(), "fi".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(VOCABULARIES_JSON)
        .create();

    let client = client_for(&server);
    let result = client.vocabularies("fi").unwrap();

    mock.assert();
    assert_eq!(result.len(), 3);

    let fixture: Value = serde_json::from_str(VOCABULARIES_JSON).unwrap();
    assert_eq!(Value::Array(result.clone()), fixture["vocabularies"]);
    assert_eq!(result[0]["id"], "yso");
}

/// Search sends defaults plus the requested vocabularies, space-joined
#[test]
fn test_search_query_string() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/v1/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "cosmolog*".into()),
            Matcher::UrlEncoded("maxhits".into(), "100".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("unique".into(), "false".into()),
            Matcher::UrlEncoded("lang".into(), "en".into()),
            Matcher::UrlEncoded("vocab".into(), "yso koko".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [
                    {"uri": "http://www.yso.fi/onto/yso/p7160", "prefLabel": "cosmology", "vocab": "yso"}
                ]
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let results = client
        .search(
            "cosmolog*",
            &SearchOptions::new().with_lang("en").with_vocabs(["yso", "koko"]),
        )
        .unwrap();

    mock.assert();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["prefLabel"], "cosmology");
}

/// Concept data is parsed into a graph with every triple of the document
#[test]
fn test_data_parses_rdf_xml() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/v1/yso/data")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uri".into(), "http://www.yso.fi/onto/yso/p7160".into()),
            Matcher::UrlEncoded("format".into(), "application/rdf+xml".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/rdf+xml")
        .with_body(P7160_RDF)
        .create();

    let client = client_for(&server);
    let data = client
        .data("http://www.yso.fi/onto/yso/p7160", Some("yso"))
        .unwrap();

    mock.assert();
    assert_eq!(data.len(), 12);

    let mut english: Vec<String> = graph::pref_labels(&data, Some("en"))
        .into_iter()
        .map(|l| l.label)
        .collect();
    english.sort();
    assert_eq!(english, vec!["astronomy", "cosmology", "universe"]);
}

/// A 404 from the data endpoint is a plain request failure
#[test]
fn test_data_not_found_is_request_failure() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/rest/v1/data")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("URI not found")
        .create();

    let err = client_for(&server)
        .data("http://example.org/missing", None)
        .unwrap_err();
    assert!(matches!(
        err,
        SkosmosError::RequestFailed { status: 404, ref body } if body == "URI not found"
    ));
}

/// Unparsable RDF/XML surfaces as an RDF error
#[test]
fn test_data_invalid_rdf() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/rest/v1/data")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html><body>maintenance</body>")
        .create();

    let err = client_for(&server)
        .data("http://www.yso.fi/onto/yso/p7160", None)
        .unwrap_err();
    assert!(matches!(err, SkosmosError::Rdf(_)));
}

/// Vocabulary-scoped lookups distinguish 404 and carry the body text
#[test]
fn test_vocabulary_not_found() {
    let mut server = Server::new();
    let _vocab = server
        .mock("GET", "/rest/v1/nope/")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Vocabulary id 'nope' not found.")
        .create();
    let _lookup = server
        .mock("GET", "/rest/v1/nope/lookup")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Could not find label 'x'")
        .create();

    let client = client_for(&server);

    match client.get_vocabulary("nope", Some("en")) {
        Err(SkosmosError::NotFound { body }) => {
            assert_eq!(body, "Vocabulary id 'nope' not found.")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    match client.lookup("nope", "x", None) {
        Err(SkosmosError::NotFound { body }) => assert_eq!(body, "Could not find label 'x'"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Vocabulary metadata is the whole JSON body
#[test]
fn test_get_vocabulary() {
    let mut server = Server::new();
    let body = json!({
        "@context": {"skos": "http://www.w3.org/2004/02/skos/core#"},
        "uri": "http://www.yso.fi/onto/yso/",
        "id": "yso",
        "title": "General Finnish ontology (archaic)",
        "defaultLanguage": "fi",
        "languages": ["en", "fi", "sv"]
    });
    let mock = server
        .mock("GET", "/rest/v1/yso/")
        .match_query(Matcher::UrlEncoded("lang".into(), "en".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let result = client_for(&server).get_vocabulary("yso", Some("en")).unwrap();

    mock.assert();
    assert_eq!(result, body);
}

/// Concept handles hit the vocabulary's endpoints with the concept URI
#[test]
fn test_concept_broader() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/v1/yso/broader")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uri".into(), "http://www.yso.fi/onto/yso/p12345".into()),
            Matcher::UrlEncoded("lang".into(), "en".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "uri": "http://www.yso.fi/onto/yso/p12345",
                "broader": [{"uri": "http://www.yso.fi/onto/yso/p3466", "prefLabel": "vehicles"}]
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let prams = client.get_concept("yso", "http://www.yso.fi/onto/yso/p12345");
    let broader = prams.broader(Some("en")).unwrap();

    mock.assert();
    assert_eq!(broader.len(), 1);
    assert_eq!(broader[0]["prefLabel"], "vehicles");
}

/// Server errors on concept operations are request failures
#[test]
fn test_concept_server_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/rest/v1/yso/related")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let err = client_for(&server)
        .get_concept("yso", "http://www.yso.fi/onto/yso/p12345")
        .related(None)
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(matches!(err, SkosmosError::RequestFailed { status: 503, .. }));
}

/// Connection failures are transport errors, not HTTP errors
#[test]
fn test_transport_error() {
    let client = VocabularyClient::new(ClientConfig::new("http://127.0.0.1:1/rest/v1/")).unwrap();

    let err = client.vocabularies("en").unwrap_err();
    assert!(matches!(err, SkosmosError::Transport(_)));
    assert_eq!(err.status(), None);
}
