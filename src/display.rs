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

//! Table rendering for ranked search results.

use crate::error::{GosearchError, Result};
use crate::search::DisplayedEntry;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

pub const INSTALLED_MARKER: &str = "*";
pub const INSTALLED_LEGEND: &str = "* = installed";
pub const NO_MATCHES_MESSAGE: &str = "No matches.";

const HEADERS: [&str; 5] = ["#", "Stars", "Imports", "Path", "Description"];

pub fn build_table(entries: &[DisplayedEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(HEADERS.iter().map(Cell::new).collect::<Vec<_>>());

    for entry in entries {
        let path = if entry.installed {
            format!("{INSTALLED_MARKER}{}", entry.hit.path)
        } else {
            entry.hit.path.clone()
        };

        table.add_row(vec![
            Cell::new(entry.index),
            Cell::new(entry.hit.stars),
            Cell::new(entry.hit.import_count),
            Cell::new(path),
            Cell::new(&entry.hit.synopsis),
        ]);
    }

    for column in 0..3 {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

/// Print the numbered result table, followed by the installed legend when the
/// installed check ran.
///
/// An empty list prints the no-matches line instead of a table and fails with
/// [`GosearchError::NoMatches`] so the run still exits non-zero.
pub fn write_results<W: Write>(
    output: &mut W,
    entries: &[DisplayedEntry],
    marks_installed: bool,
) -> Result<()> {
    if entries.is_empty() {
        writeln!(output, "{NO_MATCHES_MESSAGE}")?;
        output.flush()?;
        return Err(GosearchError::NoMatches);
    }

    writeln!(output, "{}", build_table(entries))?;
    if marks_installed {
        writeln!(output, "{INSTALLED_LEGEND}")?;
    }
    output.flush()?;

    Ok(())
}
