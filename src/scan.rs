//! Source discovery.
//!
//! Walks a directory tree and returns every file whose name carries a given
//! extension token. Matching is deliberately loose: a name matches when it
//! contains `.TOKEN` in either all-upper or all-lower form, anywhere in the
//! name, so `IMG001.JPG`, `clip.mp4` and `clip.mp4.partial` all match their
//! tokens. Mixed-case extensions do not.
//!
//! Results are ordered filename-descending so generated listings show the
//! most-recent-looking names first. Ordering is presentation policy, not a
//! correctness requirement.
//!
//! Discovery produces a finite in-memory list — card-sized trees never need
//! streaming.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Recursively collect all files under `root` whose name contains the token
/// as a `.TOKEN` / `.token` marker.
///
/// An unreadable root (missing mount, permissions) is an error, not an
/// empty result.
pub fn discover(root: &Path, token: &str) -> Result<Vec<PathBuf>, ScanError> {
    let upper = format!(".{}", token.to_uppercase());
    let lower = format!(".{}", token.to_lowercase());

    let mut matches = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.contains(&upper) || name.contains(&lower) {
            matches.push(entry.into_path());
        }
    }

    matches.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    Ok(matches)
}
