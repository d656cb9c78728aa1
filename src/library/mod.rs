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

//! Music library layout.
//!
//! The pipeline operates on a fixed directory layout beneath a single base
//! directory:
//!
//! * `download/` - input audio files and their sidecar assets.
//! * `done/` - annotated output copies.
//! * `skipped/` - set-aside files that matched the catalog but had no
//!   assets.
//! * `detail.json` - the read-only metadata catalog.
//! * `mp3tag-log.json` - the run report, written at end of run.
//!
//! # Sub-modules
//!
//! * [`scan`]: Enumeration of candidate audio files.
//! * [`sidecar`]: Discovery of cover images and lyrics files by naming
//!   convention.

pub(crate) mod scan;
pub(crate) mod sidecar;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    pub(crate) download_dir: PathBuf,
    pub(crate) done_dir: PathBuf,
    pub(crate) skipped_dir: PathBuf,
    pub(crate) catalog_file: PathBuf,
    pub(crate) report_file: PathBuf,
}

impl Layout {
    pub(crate) fn new(base: &Path) -> Self {
        Self {
            download_dir: base.join("download"),
            done_dir: base.join("done"),
            skipped_dir: base.join("skipped"),
            catalog_file: base.join("detail.json"),
            report_file: base.join("mp3tag-log.json"),
        }
    }

    /// Creates the output directories.
    ///
    /// Best-effort: a failure is logged and otherwise ignored. Later
    /// per-file copies or moves into a missing directory fail on their
    /// own, without aborting the run.
    pub(crate) fn prepare(&self) {
        ensure_dir(&self.done_dir);
        ensure_dir(&self.skipped_dir);
    }
}

fn ensure_dir(dir: &Path) {
    if let Err(e) = fs::create_dir_all(dir) {
        debug!(dir = %dir.display(), error = %e, "could not create directory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_resolves_fixed_paths_under_base() {
        let layout = Layout::new(Path::new("/music"));

        assert_eq!(layout.download_dir, Path::new("/music/download"));
        assert_eq!(layout.done_dir, Path::new("/music/done"));
        assert_eq!(layout.skipped_dir, Path::new("/music/skipped"));
        assert_eq!(layout.catalog_file, Path::new("/music/detail.json"));
        assert_eq!(layout.report_file, Path::new("/music/mp3tag-log.json"));
    }

    #[test]
    fn prepare_creates_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());

        layout.prepare();

        assert!(layout.done_dir.is_dir());
        assert!(layout.skipped_dir.is_dir());
    }
}
