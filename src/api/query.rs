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

use crate::error::{GosearchError, Result};

/// A validated free-text search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Rejects an empty or whitespace-only term.
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(GosearchError::UsageError(
                "Must provide search term".to_string(),
            ));
        }
        Ok(Self { term })
    }

    /// The term exactly as the user typed it. Path matching uses this form.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Query string parameters for the search request
    pub fn params(&self) -> [(&'static str, &str); 1] {
        [("q", self.term.as_str())]
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.term)
    }
}
