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


#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LIBRARY_RESULTS: &str = r#"{"results": [
    {"name": "yaml", "path": "gopkg.in/yaml.v2", "import_count": 90000, "stars": 5000, "synopsis": "YAML support for Go."},
    {"name": "yaml", "path": "github.com/ghodss/yaml", "import_count": 12000, "stars": 900, "synopsis": "A better way to marshal YAML."},
    {"name": "yaml", "path": "github.com/someone/yaml", "import_count": 50000, "stars": 4, "fork": true},
    {"name": "main", "path": "github.com/mikefarah/yq-yaml", "import_count": 0, "stars": 8000},
    {"name": "config", "path": "github.com/spf13/viper", "import_count": 50000, "stars": 20000}
]}"#;

/// Isolated `GOSEARCH_HOME` that is removed when dropped.
pub struct TestHomeGuard {
    dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) -> &Self {
        fs::write(self.path().join("config.toml"), contents).expect("Failed to write config.toml");
        self
    }

    /// Shell script standing in for `go` that records its arguments in
    /// `<home>/args.txt`.
    #[cfg(unix)]
    pub fn fake_go(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tool = self.path().join("go");
        fs::write(
            &tool,
            format!(
                "#!/bin/sh\necho \"$@\" > \"{}\"\n",
                self.recorded_args_path().display()
            ),
        )
        .expect("Failed to write fake go");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake go executable");
        tool
    }

    pub fn recorded_args_path(&self) -> PathBuf {
        self.path().join("args.txt")
    }

    pub fn recorded_args(&self) -> Option<String> {
        fs::read_to_string(self.recorded_args_path())
            .ok()
            .map(|s| s.trim().to_string())
    }
}

impl Default for TestHomeGuard {
    fn default() -> Self {
        Self::new()
    }
}
