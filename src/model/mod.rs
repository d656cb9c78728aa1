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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the annotation pipeline:
//! the fields parsed from a file name and the tag set assembled for a
//! single audio file before it is written into the ID3 container.

use crate::catalog::CatalogYear;

/// Artist, title and album derived from a file name.
///
/// Any of the fields may be empty; a file name matching none of the
/// delimiter patterns yields the whole name as the title.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ParsedName {
    pub artist: String,
    pub title: String,
    pub album: String,
}

/// Cover image bytes with the MIME type implied by the sidecar extension.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub mime: String,
    pub data: Vec<u8>,
}

/// Unsynchronised lyrics text with its language code.
#[derive(Debug, Clone)]
pub struct LyricsText {
    pub language: String,
    pub text: String,
}

/// Complete tag set for one audio file.
///
/// Built incrementally by the pipeline and consumed once by the tag
/// writer.
#[derive(Debug, Clone, Default)]
pub struct FileTags {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: Option<CatalogYear>,
    pub cover: Option<CoverArt>,
    pub lyrics: Option<LyricsText>,
}
