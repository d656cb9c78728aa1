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

//! Metadata catalog lookup.
//!
//! The catalog is an external, read-only JSON record set (`detail.json`)
//! supplying canonical metadata, principally the release year, keyed by
//! (title, artist). It is loaded once per run. A missing or malformed
//! catalog degrades to an empty record set rather than aborting the run:
//! every lookup then misses and the affected files are skipped.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Release year as it appears in the catalog, either a JSON number or a
/// string.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum CatalogYear {
    Number(i32),
    Text(String),
}

impl CatalogYear {
    /// Numeric form of the year, parsing string years where possible.
    pub(crate) fn as_i32(&self) -> Option<i32> {
        match self {
            CatalogYear::Number(n) => Some(*n),
            CatalogYear::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One catalog entry. Unknown fields in the source records are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogRecord {
    pub(crate) name: String,
    pub(crate) artist: String,
    #[serde(default)]
    pub(crate) year: Option<CatalogYear>,
}

/// The loaded record set, possibly empty.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Loads the catalog from a JSON file.
    ///
    /// Any read or parse failure is downgraded to a warning and yields an
    /// empty catalog; no years will be written and unmatched files are
    /// skipped downstream.
    pub(crate) fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(records) => Self { records },
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "catalog unavailable, continuing with an empty record set"
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Vec<CatalogRecord>> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Returns the first record matching the parsed title and artist.
    ///
    /// Equality is exact, case-sensitive string comparison on both keys;
    /// no normalization is applied.
    pub(crate) fn find(&self, title: &str, artist: &str) -> Option<&CatalogRecord> {
        self.records
            .iter()
            .find(|record| record.name == title && record.artist == artist)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
