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

//! Local "is this package already installed" checks.

use std::process::{Command, Stdio};

/// Answers whether a package is present locally.
///
/// The answer is advisory only. Implementations report failures of the check
/// itself as `false` instead of returning an error.
pub trait InstalledProbe {
    fn is_installed(&self, path: &str) -> bool;
}

/// Probe that runs `<tool> list <path>` and treats exit status 0 as installed.
#[derive(Debug, Clone)]
pub struct GoListProbe {
    tool: String,
}

impl GoListProbe {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl InstalledProbe for GoListProbe {
    fn is_installed(&self, path: &str) -> bool {
        let status = Command::new(&self.tool)
            .args(["list", path])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                log::debug!("'{} list {path}' exited with {status}", self.tool);
                status.success()
            }
            Err(e) => {
                log::debug!("Could not run '{} list {path}': {e}", self.tool);
                false
            }
        }
    }
}
