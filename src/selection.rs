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

use crate::error::Result;
use std::io::{BufRead, Write};

pub const SELECTION_PROMPT: &str = "Install Package #: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based index into the displayed entries
    Selected(usize),
    /// Input was not a number; the user does not want to install anything
    Declined,
}

/// Prompt until the user enters a valid entry number or something that is not
/// a number at all.
///
/// Out-of-range numbers re-prompt, as do read errors. Blank lines and end of
/// input do not parse and therefore decline.
pub fn prompt_for_entry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Result<Selection> {
    loop {
        write!(output, "{SELECTION_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if let Err(e) = input.read_line(&mut line) {
            log::error!("error reading from stdin: {e}");
            writeln!(output, "error reading from stdin")?;
            continue;
        }

        let line = line.trim();
        let number = match line.parse::<i64>() {
            Ok(number) => number,
            Err(_) => {
                log::debug!("Selection {line:?} is not a number, not installing");
                return Ok(Selection::Declined);
            }
        };

        match usize::try_from(number) {
            Ok(index) if (1..=count).contains(&index) => return Ok(Selection::Selected(index)),
            _ => writeln!(output, "No entry for {number}")?,
        }
    }
}
