//! Archive layout: bucket paths and directory management.
//!
//! A bucket is the per-capture-date directory holding one day's media:
//!
//! ```text
//! <archive>/2024-05-01/
//! ├── photo/
//! ├── rawPhoto/
//! ├── video/
//! ├── thumbnails/
//! ├── gallery.html      (generated)
//! └── info.txt          (optional, hand-written)
//! ```
//!
//! Buckets are created on the first file seen for a date and never deleted
//! by this tool. Path resolution is pure; only [`ensure_bucket`] and the
//! enumeration helpers touch the filesystem.

use crate::types::FileKind;
use chrono::NaiveDate;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory holding derived photo previews.
pub const THUMBS_DIR: &str = "thumbnails";

/// Name of the generated per-bucket gallery page.
pub const GALLERY_FILE: &str = "gallery.html";

/// Name of the generated site index page.
pub const INDEX_FILE: &str = "index.html";

/// Name of the optional hand-written bucket annotation file.
pub const INFO_FILE: &str = "info.txt";

/// Date format used for bucket directory names.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A per-date directory under the archive root.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub date: NaiveDate,
    pub path: PathBuf,
}

/// Bucket directory for a capture date.
pub fn bucket_path(archive_root: &Path, date: NaiveDate) -> PathBuf {
    archive_root.join(date.format(DATE_FORMAT).to_string())
}

/// Canonical destination for a file.
///
/// Pure: the same inputs always yield the same path. Existence at this path
/// is what the copy phase treats as "already ingested".
pub fn destination_path(
    archive_root: &Path,
    date: NaiveDate,
    kind: FileKind,
    file_name: &OsStr,
) -> PathBuf {
    bucket_path(archive_root, date)
        .join(kind.dir_name())
        .join(file_name)
}

/// Create a bucket and its subdirectories if the bucket root does not yet
/// exist; a no-op otherwise.
///
/// Single-writer: a second process racing on the same date is not handled.
pub fn ensure_bucket(archive_root: &Path, date: NaiveDate) -> io::Result<()> {
    let bucket = bucket_path(archive_root, date);
    if bucket.is_dir() {
        return Ok(());
    }
    for kind in FileKind::ALL {
        fs::create_dir_all(bucket.join(kind.dir_name()))?;
    }
    fs::create_dir_all(bucket.join(THUMBS_DIR))?;
    Ok(())
}

/// All buckets under the archive root, most recent first.
///
/// Directories whose names do not parse as a date are ignored; a missing
/// archive root reads as empty.
pub fn buckets(archive_root: &Path) -> io::Result<Vec<Bucket>> {
    if !archive_root.is_dir() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in fs::read_dir(archive_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Ok(date) = NaiveDate::parse_from_str(&name.to_string_lossy(), DATE_FORMAT) {
            found.push(Bucket {
                date,
                path: entry.path(),
            });
        }
    }
    found.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(found)
}

/// File names under a bucket's subdirectory for a kind, filename-descending.
///
/// A missing subdirectory reads as empty.
pub fn kind_files(bucket: &Path, kind: FileKind) -> io::Result<Vec<String>> {
    let dir = bucket.join(kind.dir_name());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort_by(|a, b| b.cmp(a));
    Ok(names)
}
