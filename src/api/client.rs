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

use crate::api::models::{SearchHit, SearchResponse};
use crate::api::query::SearchQuery;
use crate::config::DEFAULT_SEARCH_BASE_URL;
use crate::error::{GosearchError, Result};
use crate::user_agent;
use attohttpc::Session;
use log::{debug, trace};

const SEARCH_PATH: &str = "search";

/// Blocking client for the search endpoint. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct SearchClient {
    session: Session,
    pub(crate) base_url: String,
}

impl SearchClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::api_client());

        Self {
            session,
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), SEARCH_PATH)
    }

    /// Run a search and decode the result set
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let url = self.search_url();
        debug!("API Request: {url}?q={query}");

        let response = self
            .session
            .get(&url)
            .params(query.params())
            .send()
            .map_err(|e| GosearchError::SearchUnavailable(e.to_string()))?;

        if !response.is_success() {
            let status = response.status();
            let status_text = format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            );
            debug!("Search endpoint answered {status_text}");
            return Err(GosearchError::SearchEndpointError(status_text));
        }

        let body = response
            .text()
            .map_err(|e| GosearchError::SearchDecodeError(format!("Failed to read body: {e}")))?;
        trace!("Search response body: {body}");

        let decoded: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| GosearchError::SearchDecodeError(e.to_string()))?;

        let hits = decoded.into_hits();
        debug!("Search for '{query}' returned {} results", hits.len());
        Ok(hits)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}
