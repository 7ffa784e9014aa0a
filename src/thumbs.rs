//! Thumbnail generation.
//!
//! Thumbnails are derived from photos already in the archive, never from the
//! source card. Each photo gets a bounded-box preview — longest edge capped
//! at [`MAX_EDGE`], aspect ratio preserved — stored under the identical file
//! name in the bucket's `thumbnails/` directory. An existing thumbnail is
//! never regenerated while it is still on disk.
//!
//! The pixel work sits behind [`ThumbnailBackend`] so the walk-and-skip
//! logic can be exercised without decoding images. [`ImageBackend`] is the
//! real implementation: `image` crate decode, Lanczos3 resize, encode by
//! destination extension.

use crate::layout::{self, THUMBS_DIR};
use crate::types::FileKind;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest edge of a generated thumbnail, in pixels.
pub const MAX_EDGE: u32 = 900;

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error for {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Produces a bounded-box resized copy of an image.
pub trait ThumbnailBackend {
    fn render(&self, source: &Path, dest: &Path, max_edge: u32) -> Result<(), ThumbError>;
}

/// Backend built on the `image` crate.
pub struct ImageBackend;

impl ThumbnailBackend for ImageBackend {
    fn render(&self, source: &Path, dest: &Path, max_edge: u32) -> Result<(), ThumbError> {
        let img = image::open(source).map_err(|e| ThumbError::Image {
            path: source.to_path_buf(),
            source: e,
        })?;
        // Never upscale: an image already inside the box is re-encoded as is
        let resized = if img.width() <= max_edge && img.height() <= max_edge {
            img
        } else {
            img.resize(max_edge, max_edge, FilterType::Lanczos3)
        };
        resized.save(dest).map_err(|e| ThumbError::Image {
            path: dest.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Render a file's thumbnail unless one already exists.
///
/// Returns `true` when a thumbnail was rendered. Decode failures propagate;
/// they are not caught or retried.
pub fn ensure_thumbnail(
    bucket: &Path,
    kind: FileKind,
    file_name: &str,
    backend: &impl ThumbnailBackend,
) -> Result<bool, ThumbError> {
    let dest = bucket.join(THUMBS_DIR).join(file_name);
    if dest.exists() {
        return Ok(false);
    }
    let source = bucket.join(kind.dir_name()).join(file_name);
    backend.render(&source, &dest, MAX_EDGE)?;
    Ok(true)
}

/// Thumbnail counts for one regeneration pass.
#[derive(Debug, Default)]
pub struct ThumbReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// Walk every bucket and make sure each archived photo has its thumbnail.
pub fn regenerate(
    archive_root: &Path,
    backend: &impl ThumbnailBackend,
) -> Result<ThumbReport, ThumbError> {
    let mut report = ThumbReport::default();
    for bucket in layout::buckets(archive_root)? {
        for kind in FileKind::ALL.into_iter().filter(|k| k.has_thumbnail()) {
            for name in layout::kind_files(&bucket.path, kind)? {
                if ensure_thumbnail(&bucket.path, kind, &name, backend)? {
                    report.rendered += 1;
                } else {
                    report.skipped += 1;
                }
            }
        }
    }
    Ok(report)
}
