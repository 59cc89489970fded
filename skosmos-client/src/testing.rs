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

//! In-process transport for unit tests.

use crate::error::Result;
use crate::transport::{RawResponse, Transport};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn keys(&self) -> Vec<&str> {
        self.params.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Answers every request with the same canned response and remembers what
/// was asked. Clones share the call log.
#[derive(Debug, Clone)]
pub(crate) struct RecordingTransport {
    response: RawResponse,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingTransport {
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            response: RawResponse::new(status, body.as_bytes().to_vec()),
            calls: Arc::default(),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::text(status, &body.to_string())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        Ok(self.response.clone())
    }
}
