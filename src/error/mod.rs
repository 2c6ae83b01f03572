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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::{EXIT_FAILURE, EXIT_SUCCESS, get_exit_code};
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GosearchError {
    #[error("{0}")]
    UsageError(String),

    #[error("Search service unavailable: {0}")]
    SearchUnavailable(String),

    #[error("Search endpoint returned an error: {0}")]
    SearchEndpointError(String),

    #[error("Failed to decode search response: {0}")]
    SearchDecodeError(String),

    #[error("No matches.")]
    NoMatches,

    #[error("Could not find {tool} binary in PATH")]
    ToolNotFound { tool: String },

    #[error("Install failed: {0}")]
    InstallFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GosearchError>;
