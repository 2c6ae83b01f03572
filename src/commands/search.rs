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

use crate::api::{SearchClient, SearchQuery};
use crate::config::GosearchConfig;
use crate::display;
use crate::error::Result;
use crate::installer::{GoListProbe, PackageInstaller};
use crate::search::{FilterCriteria, ResultRanker};
use crate::selection::{Selection, prompt_for_entry};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Everything the command line decides for one run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub query: String,
    pub criteria: FilterCriteria,
    /// Run the installed check and mark installed entries
    pub show_installed: bool,
    /// Extra arguments for `go get`; empty means use the configured defaults
    pub get_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Installed { path: String },
    Declined,
}

pub struct SearchCommand<'a> {
    config: &'a GosearchConfig,
    client: SearchClient,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a GosearchConfig) -> Result<Self> {
        let client = SearchClient::new().with_base_url(config.search.base_url.clone());
        Ok(Self { config, client })
    }

    pub fn execute(&self, options: &SearchOptions) -> Result<SearchOutcome> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut output = stdout.lock();

        self.run_with_io(options, &mut input, &mut output)
    }

    /// Search, show the table, ask for a selection and install it.
    pub fn run_with_io<R: BufRead, W: Write>(
        &self,
        options: &SearchOptions,
        input: &mut R,
        output: &mut W,
    ) -> Result<SearchOutcome> {
        let query = SearchQuery::new(options.query.clone())?;
        let hits = self.client.search(&query)?;

        let probe = GoListProbe::new(self.config.install.tool.clone());
        let mut ranker = ResultRanker::new(&options.criteria);
        if options.show_installed {
            ranker = ranker.with_installed_probe(&probe);
        }
        let entries = ranker.rank(hits, &query);

        display::write_results(output, &entries, ranker.marks_installed())?;

        let index = match prompt_for_entry(input, output, entries.len())? {
            Selection::Selected(index) => index,
            Selection::Declined => {
                info!("No package selected");
                return Ok(SearchOutcome::Declined);
            }
        };

        let path = entries[index - 1].hit.path.clone();
        let installer = self.installer(&options.get_args);
        debug!("Installing {path} with {}", installer.tool());
        installer.install(&path, input, output)?;

        Ok(SearchOutcome::Installed { path })
    }

    fn installer(&self, get_args: &[String]) -> PackageInstaller {
        let args = if get_args.is_empty() {
            self.config.install.args.clone()
        } else {
            get_args.to_vec()
        };
        PackageInstaller::new(self.config.install.tool.clone(), args)
    }
}
