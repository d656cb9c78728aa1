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

//! # Batch MP3 Annotator.
//!
//! A command-line tool that annotates a directory of MP3 files in a single
//! pass.
//!
//! For each audio file in `download/` it:
//!
//! * Derives artist, title and album from the file name.
//! * Cross-references the `detail.json` catalog to recover a release year.
//! * Locates a cover image and an `.lrc` lyrics file sharing the audio
//!   file's base name.
//! * Copies the file to `done/` and writes the combined metadata into its
//!   ID3 tag container.
//!
//! Files that match the catalog but have neither cover nor lyrics are set
//! aside under `skipped/`; files already present in `done/` are skipped,
//! which makes reruns idempotent. A summary of the run is persisted to
//! `mp3tag-log.json`.
//!
//! ## Architecture
//!
//! The application follows a strict load-scan-process-report sequence on a
//! single thread; each file fully completes (or fails) before the next
//! begins.

mod catalog;
mod config;
mod library;
mod model;
mod naming;
mod pipeline;
mod tags;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{library::Layout, pipeline::report};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "chootag")]
#[command(about = "Batch cover, lyrics and year tagger for MP3 libraries")]
#[command(version)]
struct Args {
    /// Base directory containing download/, done/, skipped/ and detail.json
    base_dir: Option<PathBuf>,
}

/// The entry point of the application.
///
/// Initialises logging, loads the configuration, runs the pipeline over
/// the requested base directory and persists the run report.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let config = config::load_config();

    let base_dir = args.base_dir.unwrap_or_else(|| PathBuf::from("."));
    let layout = Layout::new(&base_dir);

    let results = pipeline::run(&layout, &config).context("Failed to process the music library")?;

    report::save_report(&layout.report_file, &results).context("Failed to write the run report")?;

    info!(
        done = results.done.len(),
        skipped = results.skipped.len(),
        failed = results.failed.len(),
        skipped_existing = results.skipped_existing.len(),
        report = %layout.report_file.display(),
        "all files processed, report saved"
    );

    Ok(())
}
