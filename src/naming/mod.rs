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

//! File name parsing.
//!
//! Audio files carry their metadata in the file name using a hyphen
//! delimiter convention. This module extracts artist, title and album from
//! an extension-stripped base name by trying an ordered list of patterns,
//! most specific first. Parsing always produces a result; a name matching
//! no pattern becomes a bare title.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParsedName;

static THREE_SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*-\s*(.*?)\s*-\s*(.*)$").unwrap());

static TWO_SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*-\s*(.*)$").unwrap());

/// Pattern matchers in priority order; the first to produce a result wins.
const MATCHERS: [fn(&str) -> Option<ParsedName>; 2] = [artist_title_album, artist_title];

/// Derives artist, title and album from an extension-stripped file name.
pub(crate) fn parse_base_name(base: &str) -> ParsedName {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(base))
        .unwrap_or_else(|| ParsedName {
            artist: String::new(),
            title: base.to_string(),
            album: String::new(),
        })
}

/// `Artist - Title - Album`; further hyphen segments fold into the album.
fn artist_title_album(base: &str) -> Option<ParsedName> {
    let caps = THREE_SEGMENTS.captures(base)?;
    Some(ParsedName {
        artist: caps[1].trim().to_string(),
        title: caps[2].trim().to_string(),
        album: caps[3].trim().to_string(),
    })
}

/// `Artist - Title`, with no album segment.
fn artist_title(base: &str) -> Option<ParsedName> {
    let caps = TWO_SEGMENTS.captures(base)?;
    Some(ParsedName {
        artist: caps[1].trim().to_string(),
        title: caps[2].trim().to_string(),
        album: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(artist: &str, title: &str, album: &str) -> ParsedName {
        ParsedName {
            artist: artist.to_string(),
            title: title.to_string(),
            album: album.to_string(),
        }
    }

    #[test]
    fn three_segments_parse_artist_title_album() {
        assert_eq!(
            parse_base_name("Artist - Title - Album"),
            parsed("Artist", "Title", "Album")
        );
    }

    #[test]
    fn two_segments_parse_artist_title() {
        assert_eq!(parse_base_name("Artist - Title"), parsed("Artist", "Title", ""));
    }

    #[test]
    fn plain_name_becomes_the_title() {
        assert_eq!(parse_base_name("JustATitle"), parsed("", "JustATitle", ""));
    }

    #[test]
    fn extra_segments_fold_into_the_album() {
        assert_eq!(
            parse_base_name("Artist - Title - Album - Deluxe"),
            parsed("Artist", "Title", "Album - Deluxe")
        );
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(
            parse_base_name("Artist   -   Title   -   Album"),
            parsed("Artist", "Title", "Album")
        );
    }
}
