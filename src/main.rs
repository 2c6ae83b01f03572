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

use clap::Parser;
use colored::*;
use gosearch::commands::search::{SearchCommand, SearchOptions, SearchOutcome};
use gosearch::config::new_gosearch_config;
use gosearch::error::{
    EXIT_FAILURE, EXIT_SUCCESS, GosearchError, Result, format_error_chain,
    format_error_with_color, get_exit_code,
};
use gosearch::logging;
use gosearch::search::FilterCriteria;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "gosearch")]
#[command(
    author,
    version,
    about = "Search the Go package index and install a result with go get",
    long_about = None
)]
#[command(after_help = "Examples:
  gosearch yaml                  # top 10 libraries with 'yaml' in their path
  gosearch --apps --limit 5 lint # applications, ranked by stars
  gosearch router -- -u -d       # pass -u -d to 'go get' instead of -u -v")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Search term
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of search results to display (0 or less shows all)
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    limit: i64,

    /// Include forks
    #[arg(long)]
    forks: bool,

    /// Search for main packages instead of libraries
    #[arg(long)]
    apps: bool,

    /// Minimum number of stars for a package to be displayed
    #[arg(
        long,
        alias = "minstars",
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    min_stars: i64,

    /// Minimum number of imports for a package to be displayed
    #[arg(
        long,
        alias = "minimports",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    min_imports: i64,

    /// Mark packages that are already installed with *
    #[arg(long)]
    installed: bool,

    /// Search term must be in the package path
    #[arg(long, alias = "inpath", value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    in_path: bool,

    /// Flags passed through to 'go get' (default: -u -v)
    #[arg(last = true, value_name = "GET_FLAGS")]
    get_args: Vec<String>,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            query: self.query.clone(),
            criteria: FilterCriteria {
                include_forks: self.forks,
                want_applications: self.apps,
                min_stars: self.min_stars,
                min_imports: self.min_imports,
                path_must_contain_query: self.in_path,
                display_limit: self.limit,
            },
            show_installed: self.installed,
            get_args: self.get_args.clone(),
        }
    }
}

fn report_error(error: &GosearchError) {
    match error {
        // already printed by the presenter
        GosearchError::NoMatches => {}
        _ if std::io::stderr().is_terminal() => eprint!("{}", format_error_with_color(error)),
        _ => eprintln!("{}", format_error_chain(error)),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            let code = if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
            std::process::exit(code);
        }
    };

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match new_gosearch_config() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            std::process::exit(get_exit_code(&e));
        }
    };

    let options = cli.search_options();
    let result: Result<SearchOutcome> = (|| {
        let command = SearchCommand::new(&config)?;
        command.execute(&options)
    })();

    match result {
        Ok(SearchOutcome::Installed { path }) => {
            println!("{} Installed {}", "✓".green().bold(), path.cyan());
        }
        Ok(SearchOutcome::Declined) => {}
        Err(e) => {
            report_error(&e);
            std::process::exit(get_exit_code(&e));
        }
    }
}
