//! Media kinds and the per-file record built during ingestion.

use chrono::{DateTime, Local, NaiveDate};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

/// The closed set of media kinds the archive recognizes.
///
/// Each kind owns one destination subdirectory inside a bucket. Photos are
/// the only kind with derived thumbnails; raw files are companions to photos
/// sharing their stem and videos are listed as plain links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Photo,
    RawPhoto,
    Video,
}

impl FileKind {
    /// Fixed ingestion order: photos, then raw companions, then videos.
    pub const ALL: [FileKind; 3] = [FileKind::Photo, FileKind::RawPhoto, FileKind::Video];

    /// Destination subdirectory inside a bucket.
    pub fn dir_name(self) -> &'static str {
        match self {
            FileKind::Photo => "photo",
            FileKind::RawPhoto => "rawPhoto",
            FileKind::Video => "video",
        }
    }

    /// Whether previews are derived for this kind.
    pub fn has_thumbnail(self) -> bool {
        matches!(self, FileKind::Photo)
    }
}

/// A source file slated for ingestion.
///
/// Exists only for the duration of a run; everything here is re-derived
/// from the filesystem on the next invocation.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub source_path: PathBuf,
    pub kind: FileKind,
    pub modified: SystemTime,
}

impl MediaFile {
    /// Build a record from a discovered path, reading its modification time.
    pub fn from_path(source_path: PathBuf, kind: FileKind) -> io::Result<Self> {
        let modified = fs::metadata(&source_path)?.modified()?;
        Ok(Self {
            source_path,
            kind,
            modified,
        })
    }

    /// Local calendar date the file was last modified.
    ///
    /// This is the bucket key. Capture date comes from the filesystem
    /// modification time, never from embedded metadata.
    pub fn capture_date(&self) -> NaiveDate {
        DateTime::<Local>::from(self.modified).date_naive()
    }

    /// Final path component of the source file.
    pub fn file_name(&self) -> &OsStr {
        self.source_path
            .file_name()
            .unwrap_or(self.source_path.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn kind_dir_names() {
        assert_eq!(FileKind::Photo.dir_name(), "photo");
        assert_eq!(FileKind::RawPhoto.dir_name(), "rawPhoto");
        assert_eq!(FileKind::Video.dir_name(), "video");
    }

    #[test]
    fn only_photos_have_thumbnails() {
        assert!(FileKind::Photo.has_thumbnail());
        assert!(!FileKind::RawPhoto.has_thumbnail());
        assert!(!FileKind::Video.has_thumbnail());
    }

    #[test]
    fn ingestion_order_is_fixed() {
        assert_eq!(
            FileKind::ALL,
            [FileKind::Photo, FileKind::RawPhoto, FileKind::Video]
        );
    }

    #[test]
    fn capture_date_truncates_local_mtime() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("IMG001.JPG");
        fs::write(&path, "fake image").unwrap();

        let noon = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::from(noon)).unwrap();

        let media = MediaFile::from_path(path, FileKind::Photo).unwrap();
        assert_eq!(
            media.capture_date(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn file_name_is_final_component() {
        let media = MediaFile {
            source_path: PathBuf::from("/card/DCIM/IMG001.JPG"),
            kind: FileKind::Photo,
            modified: SystemTime::UNIX_EPOCH,
        };
        assert_eq!(media.file_name(), "IMG001.JPG");
    }
}
