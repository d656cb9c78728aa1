// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Run outcome accumulation and the persisted report.
//!
//! Four ordered lists of file names accumulate over a run and are written
//! once, pretty-printed, when every file has been processed. There is no
//! incremental flushing; a crash mid-run loses the report but not the
//! already-tagged files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::Disposition;

/// Per-outcome file lists for one run.
///
/// A processed file appears in exactly one list. `skipped` collects both
/// the no-catalog-match and no-assets outcomes. Names are not
/// deduplicated.
#[derive(Debug, Default, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunResults {
    pub(crate) done: Vec<String>,
    pub(crate) skipped: Vec<String>,
    pub(crate) failed: Vec<String>,
    pub(crate) skipped_existing: Vec<String>,
}

impl RunResults {
    /// Appends `file` to the list matching its disposition.
    pub(crate) fn record(&mut self, file: &str, disposition: Disposition) {
        let list = match disposition {
            Disposition::Done => &mut self.done,
            Disposition::NoCatalogMatch | Disposition::NoAssets => &mut self.skipped,
            Disposition::Failed => &mut self.failed,
            Disposition::AlreadyDone => &mut self.skipped_existing,
        };
        list.push(file.to_string());
    }
}

/// Serialises the results to `path` as pretty-printed JSON.
pub(crate) fn save_report(path: &Path, results: &RunResults) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialise run results")?;
    fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))
}
