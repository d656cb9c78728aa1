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

//! Per-file disposition and the sequential run loop.
//!
//! Each candidate audio file is classified into exactly one terminal
//! outcome, evaluated strictly in this order:
//!
//! 1. `AlreadyDone` - a copy with the same name exists in `done/`.
//! 2. `NoCatalogMatch` - the parsed name has no catalog entry.
//! 3. `NoAssets` - matched, but neither cover nor lyrics sidecar exists;
//!    the source file is set aside under `skipped/`.
//! 4. `Done` / `Failed` - matched with at least one asset; the file is
//!    copied to `done/` and the tag write decides the outcome.
//!
//! Processing for a file stops at the first terminal state. The run loop
//! threads a [`RunResults`] value through each step; there is no shared
//! mutable state and files are handled one at a time, each fully
//! completing before the next begins.

pub(crate) mod report;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    catalog::{Catalog, CatalogRecord},
    config::AppConfig,
    library::{Layout, scan, sidecar},
    model::{CoverArt, FileTags, LyricsText, ParsedName},
    naming, tags,
};

use self::report::RunResults;

/// Terminal outcome for one processed file.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Disposition {
    Done,
    NoCatalogMatch,
    NoAssets,
    AlreadyDone,
    Failed,
}

/// Processes every audio file in the download directory, in name order.
///
/// The catalog is loaded once (degrading to empty on failure); each file
/// is then parsed, matched and dispatched sequentially.
///
/// # Errors
///
/// Returns an error if the download directory cannot be scanned. Per-file
/// failures never abort the run.
pub(crate) fn run(layout: &Layout, config: &AppConfig) -> Result<RunResults> {
    let catalog = Catalog::load(&layout.catalog_file);
    info!(records = catalog.len(), "catalog loaded");

    layout.prepare();

    let files = scan::audio_files(&layout.download_dir)
        .context("Failed to scan the download directory")?;
    info!(files = files.len(), dir = %layout.download_dir.display(), "processing download directory");

    let mut results = RunResults::default();
    for file in files {
        let disposition = process_file(layout, &catalog, config, &file);
        results.record(&file, disposition);
    }

    Ok(results)
}

/// Classifies and handles a single audio file, returning its disposition.
///
/// The move to `skipped/` and the copy to `done/` are best-effort; their
/// failures are logged at debug and the pipeline carries on. Only the tag
/// write decides done versus failed.
fn process_file(layout: &Layout, catalog: &Catalog, config: &AppConfig, file: &str) -> Disposition {
    let source = layout.download_dir.join(file);
    let destination = layout.done_dir.join(file);

    if destination.exists() {
        info!(file, "already in done, skipping");
        return Disposition::AlreadyDone;
    }

    let base = base_name(file);
    let parsed = naming::parse_base_name(base);

    let Some(record) = catalog.find(&parsed.title, &parsed.artist) else {
        info!(file, title = %parsed.title, artist = %parsed.artist, "no catalog match, skipping");
        return Disposition::NoCatalogMatch;
    };

    let cover_path = sidecar::find_cover(&layout.download_dir, base);
    let lyrics_path = sidecar::find_lyrics(&layout.download_dir, base);

    if cover_path.is_none() && lyrics_path.is_none() {
        info!(file, "no cover or lyrics, setting aside");
        move_to_skipped(layout, file, &source);
        return Disposition::NoAssets;
    }

    let tags = match assemble_tags(
        parsed,
        record,
        cover_path.as_deref(),
        lyrics_path.as_deref(),
        config,
    ) {
        Ok(tags) => tags,
        Err(e) => {
            warn!(file, error = %e, "could not assemble tags");
            return Disposition::Failed;
        }
    };

    if let Err(e) = fs::copy(&source, &destination) {
        debug!(file, error = %e, "copy to done failed");
    }

    info!(
        file,
        artist = %tags.artist,
        title = %tags.title,
        album = %tags.album,
        has_cover = tags.cover.is_some(),
        has_lyrics = tags.lyrics.is_some(),
        "writing tags"
    );

    match tags::write_tags(&tags, &destination) {
        Ok(()) => {
            info!(file, "done");
            Disposition::Done
        }
        Err(e) => {
            warn!(file, error = %e, "tag write failed");
            Disposition::Failed
        }
    }
}

/// File name with its extension stripped, used as the parse and sidecar
/// key.
fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file)
}

fn move_to_skipped(layout: &Layout, file: &str, source: &Path) {
    let destination = layout.skipped_dir.join(file);
    if let Err(e) = fs::rename(source, &destination) {
        debug!(file, error = %e, "move to skipped failed");
    }
}

/// Builds the tag set for a matched file, reading whichever sidecar assets
/// were found.
fn assemble_tags(
    parsed: ParsedName,
    record: &CatalogRecord,
    cover_path: Option<&Path>,
    lyrics_path: Option<&Path>,
    config: &AppConfig,
) -> Result<FileTags> {
    let cover = cover_path
        .map(|path| -> Result<CoverArt> {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read cover image {}", path.display()))?;
            Ok(CoverArt {
                mime: sidecar::image_mime(path).to_string(),
                data,
            })
        })
        .transpose()?;

    let lyrics = lyrics_path
        .map(|path| -> Result<LyricsText> {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read lyrics file {}", path.display()))?;
            Ok(LyricsText {
                language: config.lyrics_language.clone(),
                text,
            })
        })
        .transpose()?;

    Ok(FileTags {
        artist: parsed.artist,
        title: parsed.title,
        album: parsed.album,
        year: record.year.clone(),
        cover,
        lyrics,
    })
}
