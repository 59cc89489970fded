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

//! Skosmos request types
//!
//! Parameter shapes for operations that take more than a couple of
//! arguments, and the query-list conversion for each.

/// Query parameters as sent on the wire, in insertion order.
pub(crate) type Params = Vec<(&'static str, String)>;

/// Default `maxhits` for search.
pub const DEFAULT_MAX_HITS: u32 = 100;

/// One vocabulary or an ordered list of vocabularies to restrict a search to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabSelection {
    /// A single vocabulary ID, sent unchanged
    Single(String),
    /// Several vocabulary IDs, sent space-separated
    Many(Vec<String>),
}

impl VocabSelection {
    /// Value of the `vocab` query parameter.
    pub fn to_param(&self) -> String {
        match self {
            VocabSelection::Single(id) => id.clone(),
            VocabSelection::Many(ids) => ids.join(" "),
        }
    }
}

impl From<&str> for VocabSelection {
    fn from(id: &str) -> Self {
        VocabSelection::Single(id.to_string())
    }
}

impl From<String> for VocabSelection {
    fn from(id: String) -> Self {
        VocabSelection::Single(id)
    }
}

impl From<Vec<String>> for VocabSelection {
    fn from(ids: Vec<String>) -> Self {
        VocabSelection::Many(ids)
    }
}

impl From<&[&str]> for VocabSelection {
    fn from(ids: &[&str]) -> Self {
        VocabSelection::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for VocabSelection {
    fn from(ids: [&str; N]) -> Self {
        VocabSelection::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// Options for a concept search.
///
/// Unset options are left out of the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Language of labels to match against
    pub lang: Option<String>,
    /// Language of labels to return. Sent as `labellang` and independent
    /// of `lang`.
    pub labellang: Option<String>,
    /// Vocabularies to search in (default: all)
    pub vocabs: Option<VocabSelection>,
    /// Concept type URI, sent as `type`
    pub concept_type: Option<String>,
    /// Restrict to descendants of this concept URI
    pub parent: Option<String>,
    /// Restrict to members of this group URI
    pub group: Option<String>,
    /// Extra fields to include in each result, sent space-separated
    pub fields: Option<Vec<String>>,
    /// Maximum number of results (default: 100)
    pub maxhits: u32,
    /// Offset into the result list (default: 0)
    pub offset: u32,
    /// Return each concept only once (default: false)
    pub unique: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            lang: None,
            labellang: None,
            vocabs: None,
            concept_type: None,
            parent: None,
            group: None,
            fields: None,
            maxhits: DEFAULT_MAX_HITS,
            offset: 0,
            unique: false,
        }
    }
}

impl SearchOptions {
    /// Options with the default paging (100 hits from offset 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language of labels to match.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the language of labels to return.
    pub fn with_labellang(mut self, labellang: impl Into<String>) -> Self {
        self.labellang = Some(labellang.into());
        self
    }

    /// Restrict the search to one or more vocabularies.
    pub fn with_vocabs(mut self, vocabs: impl Into<VocabSelection>) -> Self {
        self.vocabs = Some(vocabs.into());
        self
    }

    /// Restrict results to a concept type URI.
    pub fn with_type(mut self, concept_type: impl Into<String>) -> Self {
        self.concept_type = Some(concept_type.into());
        self
    }

    /// Restrict results to descendants of a concept URI.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Restrict results to members of a group URI.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Request extra fields in each result.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the maximum number of results.
    pub fn with_maxhits(mut self, maxhits: u32) -> Self {
        self.maxhits = maxhits;
        self
    }

    /// Set the offset of the first result.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Return each concept only once.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Query parameters for a search for `query`.
    pub(crate) fn to_params(&self, query: &str) -> Params {
        let mut params: Params = vec![
            ("query", query.to_string()),
            ("maxhits", self.maxhits.to_string()),
            ("offset", self.offset.to_string()),
            ("unique", self.unique.to_string()),
        ];

        push_opt(&mut params, "lang", self.lang.as_deref());
        push_opt(&mut params, "labellang", self.labellang.as_deref());
        if let Some(vocabs) = &self.vocabs {
            params.push(("vocab", vocabs.to_param()));
        }
        push_opt(&mut params, "type", self.concept_type.as_deref());
        push_opt(&mut params, "parent", self.parent.as_deref());
        push_opt(&mut params, "group", self.group.as_deref());
        if let Some(fields) = &self.fields {
            params.push(("fields", fields.join(" ")));
        }

        params
    }
}

/// Append `key=value` only when a value was supplied.
pub(crate) fn push_opt(params: &mut Params, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}
