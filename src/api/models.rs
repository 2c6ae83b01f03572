// Copyright 2025 The gosearch Authors
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

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declared package name that marks an executable rather than a library.
pub const APPLICATION_PACKAGE_NAME: &str = "main";

/// One entry returned by the search endpoint.
///
/// Fields the endpoint omits decode to their zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub name: String,
    pub path: String,
    #[serde(default, alias = "ImportCount", alias = "importCount")]
    pub import_count: u64,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub score: f64,
}

impl SearchHit {
    pub fn is_application(&self) -> bool {
        self.name == APPLICATION_PACKAGE_NAME
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, alias = "Results")]
    pub results: Option<Vec<SearchHit>>,
}

impl SearchResponse {
    /// Hits with an empty path are dropped and only the first hit for a path is kept.
    pub fn into_hits(self) -> Vec<SearchHit> {
        let mut seen = HashSet::new();
        self.results
            .unwrap_or_default()
            .into_iter()
            .filter(|hit| {
                if hit.path.is_empty() {
                    log::debug!("Dropping search hit without a path: {:?}", hit.name);
                    return false;
                }
                if !seen.insert(hit.path.clone()) {
                    log::debug!("Dropping duplicate search hit for {}", hit.path);
                    return false;
                }
                true
            })
            .collect()
    }
}
