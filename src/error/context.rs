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

use crate::error::GosearchError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a GosearchError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a GosearchError) -> Self {
        let (suggestion, details) = match error {
            GosearchError::UsageError(_) => {
                let suggestion = Some(
                    "Usage: gosearch [flags] <search term> [-- go get flags]\nRun 'gosearch \
                     --help' for the list of flags."
                        .to_string(),
                );
                (suggestion, None)
            }
            GosearchError::SearchUnavailable(msg) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings, or point \
                     GOSEARCH_SEARCH__BASE_URL at a reachable mirror."
                        .to_string(),
                );
                let details = Some(format!("Network issue: {msg}"));
                (suggestion, details)
            }
            GosearchError::SearchEndpointError(status) => {
                let suggestion = if status.starts_with("429") {
                    Some("Rate limit exceeded. Please wait a few minutes and try again.".to_string())
                } else if status.starts_with('5') {
                    Some("The search service is having trouble. Try again later.".to_string())
                } else {
                    Some(
                        "The search endpoint rejected the request. Check the configured base URL."
                            .to_string(),
                    )
                };
                let details = Some(format!("HTTP status: {status}"));
                (suggestion, details)
            }
            GosearchError::SearchDecodeError(msg) => {
                let suggestion = Some(
                    "The search endpoint answered with an unexpected payload. It may have changed \
                     its response format."
                        .to_string(),
                );
                let details = Some(format!("Decode failure: {msg}"));
                (suggestion, details)
            }
            GosearchError::NoMatches => {
                let suggestion = Some(
                    "Relax the filters, e.g. --min-stars 0, --in-path false, or --forks."
                        .to_string(),
                );
                (suggestion, None)
            }
            GosearchError::ToolNotFound { tool } => {
                let suggestion = Some(format!(
                    "Ensure '{tool}' is installed and available in your PATH, or set \
                     GOSEARCH_INSTALL__TOOL."
                ));
                (suggestion, None)
            }
            GosearchError::InstallFailed(msg) => {
                let details = Some(msg.clone());
                (None, details)
            }
            GosearchError::ConfigError(msg) => {
                let suggestion = Some(
                    "Fix or remove the offending entry in config.toml or the GOSEARCH_* \
                     environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            GosearchError::Io(io_err) => {
                let details = Some(format!("I/O error: {io_err}"));
                (None, details)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
