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

//! ID3 tag writing.
//!
//! Merges an assembled tag set into the ID3 container of an MP3 file:
//! plain text frames for artist, title, album and year, an APIC
//! front-cover frame for the cover image and a USLT frame for
//! unsynchronised lyrics. The container is rewritten in place as ID3v2.4.

use std::path::Path;

use id3::frame::{Lyrics, Picture, PictureType};
use id3::{Tag, TagLike, Version};
use thiserror::Error;

use crate::catalog::CatalogYear;
use crate::model::FileTags;

const COVER_DESCRIPTION: &str = "cover";

#[derive(Debug, Error)]
pub(crate) enum TagError {
    /// The ID3 container could not be written back to the file.
    #[error("{0}")]
    Write(#[from] id3::Error),
}

/// Writes `tags` into the file at `path`.
///
/// An existing tag is loaded and updated; a file with no tag gets a fresh
/// one. The cover and lyrics frames replace any previous APIC/USLT frames
/// rather than accumulating. An empty album removes the album frame.
///
/// # Errors
///
/// Returns [`TagError`] if the container cannot be persisted; the file may
/// be left with a partially updated tag.
pub(crate) fn write_tags(tags: &FileTags, path: &Path) -> Result<(), TagError> {
    let mut tag = Tag::read_from_path(path).unwrap_or_else(|_| Tag::new());

    tag.set_artist(tags.artist.clone());
    tag.set_title(tags.title.clone());

    if tags.album.trim().is_empty() {
        tag.remove_album();
    } else {
        tag.set_album(tags.album.clone());
    }

    if let Some(year) = tags.year.as_ref() {
        if let Some(y) = year.as_i32() {
            tag.set_year(y);
        } else if let CatalogYear::Text(text) = year {
            // Not numeric; keep the raw value as a recording date.
            tag.set_text("TDRC", text.clone());
        }
    }

    if let Some(cover) = tags.cover.as_ref() {
        let _ = tag.remove("APIC");
        let _ = tag.add_frame(Picture {
            mime_type: cover.mime.clone(),
            picture_type: PictureType::CoverFront,
            description: COVER_DESCRIPTION.to_string(),
            data: cover.data.clone(),
        });
    }

    if let Some(lyrics) = tags.lyrics.as_ref() {
        let _ = tag.remove("USLT");
        let _ = tag.add_frame(Lyrics {
            lang: lyrics.language.clone(),
            description: String::new(),
            text: lyrics.text.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v24)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::model::{CoverArt, LyricsText};

    fn dummy_mp3(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really audio frames").unwrap();
        path
    }

    fn full_tags() -> FileTags {
        FileTags {
            artist: "Artist".to_string(),
            title: "Title".to_string(),
            album: "Album".to_string(),
            year: Some(CatalogYear::Number(1999)),
            cover: Some(CoverArt {
                mime: "image/jpeg".to_string(),
                data: vec![0xff, 0xd8, 0xff],
            }),
            lyrics: Some(LyricsText {
                language: "chi".to_string(),
                text: "[00:01.00] line one".to_string(),
            }),
        }
    }

    #[test]
    fn written_tags_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dummy_mp3(dir.path(), "Artist - Title - Album.mp3");

        write_tags(&full_tags(), &path).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.artist(), Some("Artist"));
        assert_eq!(tag.title(), Some("Title"));
        assert_eq!(tag.album(), Some("Album"));
        assert_eq!(tag.year(), Some(1999));

        let picture = tag.pictures().next().unwrap();
        assert_eq!(picture.mime_type, "image/jpeg");
        assert_eq!(picture.picture_type, PictureType::CoverFront);
        assert_eq!(picture.data, vec![0xff, 0xd8, 0xff]);

        let lyrics = tag.lyrics().next().unwrap();
        assert_eq!(lyrics.lang, "chi");
        assert_eq!(lyrics.text, "[00:01.00] line one");
    }

    #[test]
    fn lyrics_only_tags_have_no_picture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dummy_mp3(dir.path(), "Artist - Title.mp3");

        let tags = FileTags {
            cover: None,
            album: String::new(),
            ..full_tags()
        };
        write_tags(&tags, &path).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.pictures().count(), 0);
        assert_eq!(tag.album(), None);
        assert!(tag.lyrics().next().is_some());
    }

    #[test]
    fn string_year_is_coerced_to_the_year_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dummy_mp3(dir.path(), "a.mp3");

        let tags = FileTags {
            year: Some(CatalogYear::Text("2003".to_string())),
            ..full_tags()
        };
        write_tags(&tags, &path).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.year(), Some(2003));
    }

    #[test]
    fn rewriting_replaces_cover_and_lyrics_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dummy_mp3(dir.path(), "a.mp3");

        write_tags(&full_tags(), &path).unwrap();
        let tags = FileTags {
            cover: Some(CoverArt {
                mime: "image/png".to_string(),
                data: vec![0x89, 0x50],
            }),
            ..full_tags()
        };
        write_tags(&tags, &path).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.pictures().count(), 1);
        assert_eq!(tag.pictures().next().unwrap().mime_type, "image/png");
        assert_eq!(tag.lyrics().count(), 1);
    }

    #[test]
    fn missing_target_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = write_tags(&full_tags(), &dir.path().join("absent.mp3"));

        assert!(result.is_err());
    }
}
