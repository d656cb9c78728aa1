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

//! Candidate audio file enumeration.
//!
//! Scans the input directory, non-recursively, for files carrying the
//! recognised audio extension. Everything else in the directory (sidecar
//! assets included) is ignored here.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

const AUDIO_EXT: &str = "mp3";

/// Lists the audio file names in `dir`, sorted by name.
///
/// The extension comparison is case-insensitive, so `TRACK.MP3` is picked
/// up alongside `track.mp3`.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read.
pub(crate) fn audio_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let is_audio = entry
            .path()
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(AUDIO_EXT));
        if !is_audio {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn lists_only_audio_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mp3", "a.mp3", "cover.jpg", "lyrics.lrc", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.mp3"), b"x").unwrap();

        let files = audio_files(dir.path()).unwrap();

        assert_eq!(files, vec!["a.mp3".to_string(), "b.mp3".to_string()]);
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("TRACK.MP3"), b"x").unwrap();

        let files = audio_files(dir.path()).unwrap();

        assert_eq!(files, vec!["TRACK.MP3".to_string()]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(audio_files(&dir.path().join("absent")).is_err());
    }
}
