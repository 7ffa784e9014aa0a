//! Run orchestration.
//!
//! A run moves through a fixed sequence of phases with no branching back:
//!
//! ```text
//! cleanup stale pages → ingest → thumbnails → rebuild galleries → wrap → done
//! ```
//!
//! [`RunMode::RegenerateOnly`] skips ingestion and leaves the copied media
//! untouched; everything else is identical. There is no retry and no
//! rollback: the first error ends the run, and the next invocation starts
//! over from cleanup. Copy-if-absent and delete-then-rebuild make that
//! restart safe — finished work is skipped and derived pages are rebuilt
//! from whatever is on disk.

use crate::config::Config;
use crate::gallery::{self, GalleryError};
use crate::ingest::{self, IngestError};
use crate::output;
use crate::thumbs::{self, ThumbError, ThumbnailBackend};
use std::fs;
use thiserror::Error;

/// How much of the pipeline a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// All phases, ingestion included.
    Full,
    /// Thumbnails and galleries only; the source media is never read.
    RegenerateOnly,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),
    #[error("thumbnail error: {0}")]
    Thumb(#[from] ThumbError),
    #[error("gallery error: {0}")]
    Gallery(#[from] GalleryError),
}

/// Execute a run with the real image backend.
pub fn run(config: &Config, mode: RunMode) -> Result<(), RunError> {
    run_with_backend(config, mode, &thumbs::ImageBackend)
}

/// Execute a run with a specific thumbnail backend.
pub fn run_with_backend(
    config: &Config,
    mode: RunMode,
    backend: &impl ThumbnailBackend,
) -> Result<(), RunError> {
    fs::create_dir_all(&config.archive_root)?;

    let removed = gallery::clean_stale(&config.archive_root)?;
    output::print_cleanup_complete(removed);

    if mode == RunMode::Full {
        let report = ingest::ingest(config)?;
        output::print_ingest_complete(&report);
    }

    let thumb_report = thumbs::regenerate(&config.archive_root, backend)?;
    output::print_thumbnails_complete(&thumb_report);

    let pages = gallery::build(&config.archive_root)?;
    let page_count = pages.len();
    gallery::wrap_and_write(pages)?;
    output::print_galleries_complete(page_count);

    output::print_done();
    Ok(())
}
