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


mod common;

use assert_cmd::Command;
use common::{LIBRARY_RESULTS, TestHomeGuard};
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use predicates::str::contains;

fn mock_search(term: &str, status: usize, body: &str) -> ServerGuard {
    let mut server = Server::new();
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), term.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();
    server
}

/// `gosearch` isolated from the user's home and environment.
fn gosearch(home: &TestHomeGuard) -> Command {
    let mut cmd = Command::cargo_bin("gosearch").unwrap();
    cmd.env("GOSEARCH_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("GOSEARCH_SEARCH__BASE_URL")
        .env_remove("GOSEARCH_INSTALL__TOOL")
        .env_remove("GOSEARCH_INSTALL__ARGS")
        .env_remove("RUST_LOG");
    cmd
}

fn gosearch_against(home: &TestHomeGuard, server: &ServerGuard) -> Command {
    let mut cmd = gosearch(home);
    cmd.env("GOSEARCH_SEARCH__BASE_URL", server.url());
    cmd
}

#[test]
fn test_help_lists_filters() {
    let home = TestHomeGuard::new();
    gosearch(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--min-stars"))
        .stdout(contains("--min-imports"))
        .stdout(contains("--in-path"))
        .stdout(contains("--installed"));
}

#[test]
fn test_version_succeeds() {
    let home = TestHomeGuard::new();
    gosearch(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_query_is_usage_failure() {
    let home = TestHomeGuard::new();
    gosearch(&home).assert().code(1);
}

#[test]
fn test_blank_query_is_usage_failure() {
    let home = TestHomeGuard::new();
    gosearch(&home)
        .arg("  ")
        .assert()
        .code(1)
        .stderr(contains("Must provide search term"));
}

#[test]
fn test_unknown_flag_is_usage_failure() {
    let home = TestHomeGuard::new();
    gosearch(&home)
        .args(["--bogus", "yaml"])
        .assert()
        .code(1);
}

#[test]
fn test_non_numeric_selection_declines() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);

    gosearch_against(&home, &server)
        .arg("yaml")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(contains("gopkg.in/yaml.v2"))
        .stdout(contains("github.com/ghodss/yaml"))
        .stdout(contains("Install Package #: "))
        .stdout(contains("github.com/someone/yaml").not())
        .stdout(contains("github.com/mikefarah/yq-yaml").not())
        .stdout(contains("github.com/spf13/viper").not())
        .stdout(contains("Installing").not());
}

#[test]
fn test_apps_and_limit_flags() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);

    gosearch_against(&home, &server)
        .args(["--apps", "-n", "1", "yaml"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("github.com/mikefarah/yq-yaml"))
        .stdout(contains("gopkg.in/yaml.v2").not());
}

#[test]
fn test_in_path_false_and_forks_widen_results() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);

    gosearch_against(&home, &server)
        .args(["--in-path", "false", "--forks", "yaml"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("github.com/spf13/viper"))
        .stdout(contains("github.com/someone/yaml"));
}

#[test]
fn test_no_matches_fails() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, r#"{"results": []}"#);

    gosearch_against(&home, &server)
        .arg("yaml")
        .write_stdin("1\n")
        .assert()
        .code(1)
        .stdout(contains("No matches."))
        .stdout(contains("Install Package #").not())
        .stderr(contains("Error:").not());
}

#[test]
fn test_endpoint_error_fails() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 503, "");

    gosearch_against(&home, &server)
        .arg("yaml")
        .assert()
        .code(1)
        .stderr(contains("503"));
}

#[test]
fn test_base_url_from_config_file() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);
    home.write_config(&format!("[search]\nbase_url = \"{}\"\n", server.url()));

    gosearch(&home)
        .arg("yaml")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("gopkg.in/yaml.v2"));
}

#[test]
fn test_missing_tool_fails_after_selection() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);

    gosearch_against(&home, &server)
        .env("GOSEARCH_INSTALL__TOOL", "gosearch-no-such-tool")
        .arg("yaml")
        .write_stdin("1\n")
        .assert()
        .code(1)
        .stdout(contains("Installing gopkg.in/yaml.v2"))
        .stderr(contains("Could not find gosearch-no-such-tool binary in PATH"));
}

#[test]
#[cfg(unix)]
fn test_install_uses_default_get_flags() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);
    let tool = home.fake_go();

    gosearch_against(&home, &server)
        .env("GOSEARCH_INSTALL__TOOL", &tool)
        .arg("yaml")
        .write_stdin("2\n\n")
        .assert()
        .success()
        .stdout(contains("Install command:"))
        .stdout(contains("Press enter to continue..."))
        .stdout(contains("Installed github.com/ghodss/yaml"));

    assert_eq!(
        home.recorded_args().as_deref(),
        Some("get -u -v github.com/ghodss/yaml")
    );
}

#[test]
#[cfg(unix)]
fn test_install_passes_through_get_flags() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);
    let tool = home.fake_go();

    gosearch_against(&home, &server)
        .env("GOSEARCH_INSTALL__TOOL", &tool)
        .args(["yaml", "--", "-d", "-t"])
        .write_stdin("1\n\n")
        .assert()
        .success();

    assert_eq!(
        home.recorded_args().as_deref(),
        Some("get -d -t gopkg.in/yaml.v2")
    );
}

#[test]
#[cfg(unix)]
fn test_failed_install_exits_one() {
    let home = TestHomeGuard::new();
    let server = mock_search("yaml", 200, LIBRARY_RESULTS);

    gosearch_against(&home, &server)
        .env("GOSEARCH_INSTALL__TOOL", "false")
        .arg("yaml")
        .write_stdin("1\n\n")
        .assert()
        .code(1);
}
