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

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Every failure exits with 1. The match is exhaustive so a new variant has to
/// pick its code here.
pub fn get_exit_code(error: &GosearchError) -> i32 {
    match error {
        GosearchError::UsageError(_) => EXIT_FAILURE,

        GosearchError::SearchUnavailable(_)
        | GosearchError::SearchEndpointError(_)
        | GosearchError::SearchDecodeError(_) => EXIT_FAILURE,

        GosearchError::NoMatches => EXIT_FAILURE,

        GosearchError::ToolNotFound { .. } | GosearchError::InstallFailed(_) => EXIT_FAILURE,

        GosearchError::ConfigError(_) | GosearchError::Io(_) => EXIT_FAILURE,
    }
}
