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

use anyhow::{Context, Result};
use skosmos_client::ClientConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Endpoint settings given on the command line or through the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolve the client configuration with priority: flags/env > file > defaults
pub fn load(config_file: Option<PathBuf>, overrides: Overrides) -> Result<ClientConfig> {
    let mut config = if let Some(path) = config_file {
        if path.exists() {
            tracing::info!("Loading configuration from file: {:?}", path);
            ClientConfig::from_file(&path)
                .with_context(|| format!("Failed to load config file {:?}", path))?
        } else {
            tracing::warn!("Config file not found: {:?}, using defaults", path);
            ClientConfig::default()
        }
    } else {
        ClientConfig::default()
    };

    if let Some(api_base) = overrides.api_base {
        config.api_base = api_base;
    }
    if let Some(timeout) = overrides.timeout_secs {
        config.timeout = Duration::from_secs(timeout);
    }

    config.validated().context("Invalid client configuration")
}
