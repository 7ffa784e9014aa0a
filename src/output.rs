//! Console output formatting.
//!
//! Each phase has a `format_*` function returning the exact line it prints
//! and a thin `print_*` wrapper that writes to stdout. Format functions are
//! pure — no I/O — so tests assert on output without capturing stdout.
//!
//! The contract is deliberately small: one `copying file <path>` line per
//! file actually copied, one completion line per phase, and a terminal
//! `done` marker. Failures surface through error returns, not log lines.

use crate::ingest::IngestReport;
use crate::thumbs::ThumbReport;
use std::path::Path;

/// Progress line for a single copied file.
pub fn format_copy_line(path: &Path) -> String {
    format!("copying file {}", path.display())
}

pub fn print_copy_line(path: &Path) {
    println!("{}", format_copy_line(path));
}

/// Completion marker for the stale-page cleanup phase.
pub fn format_cleanup_complete(removed: usize) -> String {
    format!("cleanup complete ({removed} stale pages removed)")
}

pub fn print_cleanup_complete(removed: usize) {
    println!("{}", format_cleanup_complete(removed));
}

/// Completion marker for the ingestion phase.
pub fn format_ingest_complete(report: &IngestReport) -> String {
    format!(
        "ingest complete ({} copied, {} skipped)",
        report.copied, report.skipped
    )
}

pub fn print_ingest_complete(report: &IngestReport) {
    println!("{}", format_ingest_complete(report));
}

/// Completion marker for the thumbnail phase.
pub fn format_thumbnails_complete(report: &ThumbReport) -> String {
    format!(
        "thumbnails complete ({} rendered, {} skipped)",
        report.rendered, report.skipped
    )
}

pub fn print_thumbnails_complete(report: &ThumbReport) {
    println!("{}", format_thumbnails_complete(report));
}

/// Completion marker for the gallery phase.
pub fn format_galleries_complete(pages: usize) -> String {
    format!("galleries complete ({pages} pages written)")
}

pub fn print_galleries_complete(pages: usize) {
    println!("{}", format_galleries_complete(pages));
}

/// Terminal marker for a finished run.
pub fn format_done() -> &'static str {
    "done"
}

pub fn print_done() {
    println!("{}", format_done());
}
