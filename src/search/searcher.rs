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

use crate::api::{SearchHit, SearchQuery};
use crate::installer::InstalledProbe;
use log::{debug, trace};

use super::models::{DisplayedEntry, FilterCriteria};

/// Turns the raw result set into the ordered, numbered list shown to the user.
pub struct ResultRanker<'a> {
    criteria: &'a FilterCriteria,
    probe: Option<&'a dyn InstalledProbe>,
}

impl<'a> ResultRanker<'a> {
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            probe: None,
        }
    }

    /// Mark displayed entries that the probe reports as installed.
    pub fn with_installed_probe(mut self, probe: &'a dyn InstalledProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn marks_installed(&self) -> bool {
        self.probe.is_some()
    }

    /// Order, filter, truncate and number the hits.
    ///
    /// Ties on the ranking key fall back to the import path so the output is
    /// deterministic. The probe only runs for entries that make it into the
    /// list.
    pub fn rank(&self, mut hits: Vec<SearchHit>, query: &SearchQuery) -> Vec<DisplayedEntry> {
        let total = hits.len();
        let key = self.criteria.rank_key();
        hits.sort_by(|a, b| {
            key.value(b)
                .cmp(&key.value(a))
                .then_with(|| a.path.cmp(&b.path))
        });

        let limit = self.criteria.limit().unwrap_or(usize::MAX);
        let entries: Vec<DisplayedEntry> = hits
            .into_iter()
            .filter(|hit| self.accepts(hit, query))
            .take(limit)
            .enumerate()
            .map(|(position, hit)| {
                let installed = self.probe.is_some_and(|probe| probe.is_installed(&hit.path));
                DisplayedEntry {
                    index: position + 1,
                    hit,
                    installed,
                }
            })
            .collect();

        debug!(
            "Kept {} of {total} results (ranked by {key:?})",
            entries.len()
        );
        entries
    }

    /// Whether a hit passes every filter predicate.
    pub fn accepts(&self, hit: &SearchHit, query: &SearchQuery) -> bool {
        let criteria = self.criteria;

        if !criteria.include_forks && hit.fork {
            trace!("Skipping fork {}", hit.path);
            return false;
        }

        if criteria.want_applications != hit.is_application() {
            trace!("Skipping {} (package name {:?})", hit.path, hit.name);
            return false;
        }

        if !meets_threshold(hit.stars, criteria.min_stars) {
            trace!("Skipping {} ({} stars)", hit.path, hit.stars);
            return false;
        }

        if !meets_threshold(hit.import_count, criteria.min_imports) {
            trace!("Skipping {} ({} imports)", hit.path, hit.import_count);
            return false;
        }

        if criteria.path_must_contain_query && !hit.path.contains(query.term()) {
            trace!("Skipping {} (query not in path)", hit.path);
            return false;
        }

        true
    }
}

fn meets_threshold(value: u64, minimum: i64) -> bool {
    match u64::try_from(minimum) {
        Ok(minimum) => value >= minimum,
        // negative thresholds never exclude anything
        Err(_) => true,
    }
}
