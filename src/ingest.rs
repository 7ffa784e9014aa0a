//! Ingestion: copy discovered media into their buckets.
//!
//! The copy step is the idempotence primitive the whole pipeline relies on.
//! A file is copied only when nothing exists at its destination path; path
//! existence is the sole dedup signal. Contents are never compared, so two
//! distinct source files sharing a name keep only the first seen.
//!
//! A pass is fail-fast: the first discovery or copy error aborts the run
//! with no partial-success summary. Re-running after a failure is safe —
//! completed copies are skipped.

use crate::config::Config;
use crate::layout;
use crate::output;
use crate::scan::{self, ScanError};
use crate::types::{FileKind, MediaFile};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What [`copy_if_absent`] did for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Skipped,
}

/// Copy counts for one ingestion pass.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub copied: usize,
    pub skipped: usize,
}

/// Copy a file to its destination unless something is already there.
///
/// The copy preserves the source modification time, keeping the bucket key
/// stable for the archived file.
pub fn copy_if_absent(file: &MediaFile, archive_root: &Path) -> Result<CopyOutcome, IngestError> {
    let dest = layout::destination_path(
        archive_root,
        file.capture_date(),
        file.kind,
        file.file_name(),
    );
    if dest.exists() {
        return Ok(CopyOutcome::Skipped);
    }
    fs::copy(&file.source_path, &dest)?;
    let copied = fs::File::options().write(true).open(&dest)?;
    copied.set_modified(file.modified)?;
    Ok(CopyOutcome::Copied)
}

/// One full ingestion pass over the source root.
///
/// Kinds are processed in the fixed [`FileKind::ALL`] order. A bucket is
/// created on the first file seen for its date; one progress line is printed
/// per file actually copied.
pub fn ingest(config: &Config) -> Result<IngestReport, IngestError> {
    let mut report = IngestReport::default();
    let mut ensured: HashSet<NaiveDate> = HashSet::new();

    for kind in FileKind::ALL {
        for path in scan::discover(&config.source_root, config.token(kind))? {
            let file = MediaFile::from_path(path, kind)?;
            let date = file.capture_date();
            if ensured.insert(date) {
                layout::ensure_bucket(&config.archive_root, date)?;
            }
            match copy_if_absent(&file, &config.archive_root)? {
                CopyOutcome::Copied => {
                    output::print_copy_line(&file.source_path);
                    report.copied += 1;
                }
                CopyOutcome::Skipped => report.skipped += 1,
            }
        }
    }

    Ok(report)
}
