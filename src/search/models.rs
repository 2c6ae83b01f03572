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

//! Data models for filtering and ranking search hits.

use crate::api::SearchHit;

pub const DEFAULT_DISPLAY_LIMIT: i64 = 10;
pub const DEFAULT_MIN_STARS: i64 = 1;
pub const DEFAULT_MIN_IMPORTS: i64 = 0;

/// User-supplied filter settings for one run.
///
/// Built once from the command line and never mutated afterwards. Thresholds
/// are signed so that zero or negative values simply disable them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep hits flagged as forks
    pub include_forks: bool,

    /// Keep only application (`main`) packages and rank by stars
    pub want_applications: bool,

    pub min_stars: i64,

    pub min_imports: i64,

    /// Require the query to appear verbatim in the import path
    pub path_must_contain_query: bool,

    /// Maximum number of entries to display; zero or negative means unlimited
    pub display_limit: i64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            include_forks: false,
            want_applications: false,
            min_stars: DEFAULT_MIN_STARS,
            min_imports: DEFAULT_MIN_IMPORTS,
            path_must_contain_query: true,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl FilterCriteria {
    /// Applications are ranked by stars, libraries by import count.
    pub fn rank_key(&self) -> RankKey {
        if self.want_applications {
            RankKey::Stars
        } else {
            RankKey::Imports
        }
    }

    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.display_limit)
            .ok()
            .filter(|limit| *limit > 0)
    }
}

/// The popularity signal results are ordered by, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Stars,
    Imports,
}

impl RankKey {
    pub fn value(self, hit: &SearchHit) -> u64 {
        match self {
            RankKey::Stars => hit.stars,
            RankKey::Imports => hit.import_count,
        }
    }
}

/// A search hit as shown in the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedEntry {
    /// 1-based position in the table
    pub index: usize,
    pub hit: SearchHit,
    pub installed: bool,
}
