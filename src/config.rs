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
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "GOSEARCH_HOME";
const ENV_PREFIX: &str = "GOSEARCH";
const DEFAULT_HOME_DIR: &str = ".gosearch";

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.godoc.org";
pub const DEFAULT_INSTALL_TOOL: &str = "go";
pub const DEFAULT_INSTALL_ARGS: [&str; 2] = ["-u", "-v"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GosearchConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Package manager executable looked up on PATH
    #[serde(default = "default_install_tool")]
    pub tool: String,

    /// Flags passed to `<tool> get` when none are given on the command line
    #[serde(default = "default_install_args")]
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            tool: default_install_tool(),
            args: default_install_args(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SEARCH_BASE_URL.to_string()
}

fn default_install_tool() -> String {
    DEFAULT_INSTALL_TOOL.to_string()
}

fn default_install_args() -> Vec<String> {
    DEFAULT_INSTALL_ARGS.iter().map(|s| s.to_string()).collect()
}

impl GosearchConfig {
    /// Load configuration from `<home>/config.toml` and the process environment
    pub fn new(home: Option<PathBuf>) -> Result<Self> {
        Self::load(home, None)
    }

    /// Layer defaults, the optional config file, and `GOSEARCH_*` variables.
    ///
    /// `env` replaces the process environment when given.
    pub fn load(home: Option<PathBuf>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(home) = &home {
            let config_path = home.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::debug!("Loading config from {config_path:?}");
            } else {
                log::debug!("Config file not found at {config_path:?}, using defaults");
            }
            builder = builder.add_source(
                File::from(config_path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(" ")
                .with_list_parse_key("install.args")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder
            .build()
            .map_err(|e| GosearchError::ConfigError(format!("Failed to load config: {e}")))?;

        let config: GosearchConfig = settings
            .try_deserialize()
            .map_err(|e| GosearchError::ConfigError(format!("Invalid config: {e}")))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.search.base_url.trim().is_empty() {
            return Err(GosearchError::ConfigError(
                "search.base_url must not be empty".to_string(),
            ));
        }
        if self.install.tool.trim().is_empty() {
            return Err(GosearchError::ConfigError(
                "install.tool must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the configuration home: `$GOSEARCH_HOME`, else `~/.gosearch`
pub fn resolve_home() -> Option<PathBuf> {
    match std::env::var_os(HOME_ENV_VAR) {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir().map(|home| home.join(DEFAULT_HOME_DIR)),
    }
}

pub fn new_gosearch_config() -> Result<GosearchConfig> {
    GosearchConfig::new(resolve_home())
}
