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

//! Sidecar asset discovery.
//!
//! A sidecar file is an auxiliary file sharing an audio file's base name,
//! providing embeddable content: a cover image or an `.lrc` lyrics file.
//! Lookups are existence checks only; content is read later, when the tag
//! set is assembled.

use std::path::{Path, PathBuf};

/// Image extensions probed for a cover, in priority order.
const IMAGE_EXTS: [&str; 3] = ["jpg", "jpeg", "png"];

const LYRICS_EXT: &str = "lrc";

/// Finds a cover image for `base`, returning the first extension that
/// exists.
pub(crate) fn find_cover(dir: &Path, base: &str) -> Option<PathBuf> {
    IMAGE_EXTS
        .iter()
        .map(|ext| dir.join(format!("{base}.{ext}")))
        .find(|path| path.is_file())
}

/// Finds an `.lrc` lyrics file for `base`.
pub(crate) fn find_lyrics(dir: &Path, base: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{base}.{LYRICS_EXT}"));
    path.is_file().then_some(path)
}

/// MIME type implied by a cover file's extension; anything that is not
/// `.png` is treated as JPEG.
pub(crate) fn image_mime(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn cover_lookup_prefers_jpg_over_png() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Song.png"), b"png").unwrap();
        fs::write(dir.path().join("Song.jpg"), b"jpg").unwrap();

        let cover = find_cover(dir.path(), "Song").unwrap();

        assert_eq!(cover, dir.path().join("Song.jpg"));
    }

    #[test]
    fn cover_lookup_returns_none_without_an_image() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Song.lrc"), b"lyrics").unwrap();

        assert!(find_cover(dir.path(), "Song").is_none());
    }

    #[test]
    fn lyrics_lookup_probes_the_lrc_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Song.lrc"), b"lyrics").unwrap();

        assert_eq!(find_lyrics(dir.path(), "Song").unwrap(), dir.path().join("Song.lrc"));
        assert!(find_lyrics(dir.path(), "Other").is_none());
    }

    #[test]
    fn mime_is_png_only_for_png_extensions() {
        assert_eq!(image_mime(Path::new("a.png")), "image/png");
        assert_eq!(image_mime(Path::new("a.PNG")), "image/png");
        assert_eq!(image_mime(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("a.jpeg")), "image/jpeg");
    }
}
