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
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const INSTALL_SUBCOMMAND: &str = "get";

/// Runs `<tool> get [args...] <path>` for the selected package.
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    tool: String,
    args: Vec<String>,
}

impl PackageInstaller {
    pub fn new(tool: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            tool: tool.into(),
            args,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Argument vector: subcommand, pass-through args, then the import path.
    pub fn compose_args(&self, path: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 2);
        args.push(INSTALL_SUBCOMMAND.to_string());
        args.extend(self.args.iter().cloned());
        args.push(path.to_string());
        args
    }

    /// Resolve the tool on `PATH`. A tool given as a path is checked directly.
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(&self.tool).map_err(|e| {
            log::debug!("Lookup of '{}' failed: {e}", self.tool);
            GosearchError::ToolNotFound {
                tool: self.tool.clone(),
            }
        })
    }

    /// Show the command, wait for one line of confirmation, then run it.
    ///
    /// The child writes straight to this process's stdout and stderr.
    pub fn install<R: BufRead, W: Write>(
        &self,
        path: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        writeln!(output, "Installing {path}")?;

        let binary = self.locate()?;
        let args = self.compose_args(path);

        writeln!(
            output,
            "Install command: {} {}",
            binary.display(),
            args.join(" ")
        )?;
        writeln!(output, "Press enter to continue...")?;
        output.flush()?;

        let mut confirmation = String::new();
        if let Err(e) = input.read_line(&mut confirmation) {
            log::warn!("Failed to read confirmation, continuing: {e}");
        }

        run_inherited(&binary, &args)
    }
}

fn run_inherited(binary: &Path, args: &[String]) -> Result<()> {
    log::debug!("Running {} {:?}", binary.display(), args);

    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            GosearchError::InstallFailed(format!("failed to start {}: {e}", binary.display()))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GosearchError::InstallFailed(status.to_string()))
    }
}
