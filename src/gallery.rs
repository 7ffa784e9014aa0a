//! Gallery generation.
//!
//! The HTML artifacts are a materialized view of the archive: every pass
//! deletes the previously generated pages and rebuilds them from whatever is
//! on disk, never appending to existing files. Rebuilding from scratch is
//! what makes the output converge — two passes over an unchanged archive
//! produce byte-identical pages, and entries are never duplicated.
//!
//! ## Generated Pages
//!
//! - **Per-bucket page** (`<bucket>/gallery.html`): one entry per photo —
//!   format links, thumbnail — followed by one labeled link per video. A
//!   photo's raw link is live only when a file with the same stem sits in
//!   the bucket's `rawPhoto/` directory; otherwise the marker is rendered
//!   but disabled.
//! - **Site index** (`<archive>/index.html`): one row per bucket, newest
//!   first, annotated from the bucket's optional hand-written `info.txt`
//!   (line 1: title, shown uppercased; line 2: description).
//!
//! ## Assembly vs. Wrapping
//!
//! [`build`] assembles unwrapped page bodies; [`wrap_and_write`] applies the
//! fixed chrome (stylesheet reference, site header, footer) and writes the
//! documents. Nothing reads the gallery files between cleanup and the final
//! write.
//!
//! HTML goes through [maud](https://maud.lambda.xyz/): compile-time checked,
//! auto-escaped.

use crate::layout::{self, GALLERY_FILE, INDEX_FILE, INFO_FILE, THUMBS_DIR};
use crate::types::FileKind;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stylesheet referenced by every generated page. Served as a static asset;
/// never written by this tool.
const STYLESHEET_HREF: &str = "/assets/gallery.css";

/// Hand-written two-line annotation for a bucket: title, then description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketInfo {
    pub title: String,
    pub description: String,
}

/// One photo row on a bucket page.
#[derive(Debug, Clone)]
pub struct PhotoEntry {
    pub file_name: String,
    /// Name of the same-stem file under `rawPhoto/`, when one exists.
    pub raw_name: Option<String>,
}

/// A page body plus where it belongs, before chrome is applied.
pub struct RenderedPage {
    pub path: PathBuf,
    pub title: String,
    pub body: Markup,
}

/// Delete every generated per-bucket gallery page and the site index.
///
/// Returns how many files were removed.
pub fn clean_stale(archive_root: &Path) -> Result<usize, GalleryError> {
    let mut removed = 0;
    for bucket in layout::buckets(archive_root)? {
        let page = bucket.path.join(GALLERY_FILE);
        if page.exists() {
            fs::remove_file(&page)?;
            removed += 1;
        }
    }
    let index = archive_root.join(INDEX_FILE);
    if index.exists() {
        fs::remove_file(&index)?;
        removed += 1;
    }
    Ok(removed)
}

/// Assemble unwrapped page bodies for every bucket plus the site index.
pub fn build(archive_root: &Path) -> Result<Vec<RenderedPage>, GalleryError> {
    let buckets = layout::buckets(archive_root)?;
    let mut pages = Vec::new();
    let mut rows = Vec::new();

    for bucket in &buckets {
        let date = bucket.date.to_string();
        let photos = photo_entries(&bucket.path)?;
        let videos = layout::kind_files(&bucket.path, FileKind::Video)?;
        pages.push(RenderedPage {
            path: bucket.path.join(GALLERY_FILE),
            title: date.clone(),
            body: bucket_body(&date, &photos, &videos),
        });
        rows.push((date, read_info(&bucket.path)?));
    }

    pages.push(RenderedPage {
        path: archive_root.join(INDEX_FILE),
        title: "Photo Archive".to_string(),
        body: index_body(&rows),
    });
    Ok(pages)
}

/// Apply the fixed page chrome and write every page to disk.
pub fn wrap_and_write(pages: Vec<RenderedPage>) -> Result<(), GalleryError> {
    for page in pages {
        let doc = base_document(&page.title, page.body);
        fs::write(&page.path, doc.into_string())?;
    }
    Ok(())
}

/// Pair each photo in a bucket with its raw companion, if present.
fn photo_entries(bucket: &Path) -> Result<Vec<PhotoEntry>, GalleryError> {
    let raws = layout::kind_files(bucket, FileKind::RawPhoto)?;
    let photos = layout::kind_files(bucket, FileKind::Photo)?;
    Ok(photos
        .into_iter()
        .map(|file_name| {
            let raw_name = raws
                .iter()
                .find(|r| file_stem(r) == file_stem(&file_name))
                .cloned();
            PhotoEntry {
                file_name,
                raw_name,
            }
        })
        .collect())
}

fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

/// Read a bucket's optional `info.txt`.
///
/// A missing file reads as empty annotations; an unreadable one is an error.
pub fn read_info(bucket: &Path) -> Result<BucketInfo, GalleryError> {
    let path = bucket.join(INFO_FILE);
    if !path.exists() {
        return Ok(BucketInfo::default());
    }
    let content = fs::read_to_string(&path)?;
    let mut lines = content.lines();
    Ok(BucketInfo {
        title: lines.next().unwrap_or("").trim().to_string(),
        description: lines.next().unwrap_or("").trim().to_string(),
    })
}

// ============================================================================
// Renderers
// ============================================================================

/// Fixed chrome wrapped around every generated document.
pub fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET_HREF);
            }
            body {
                header.site-header {
                    a href={ "/" (INDEX_FILE) } { "Photo Archive" }
                }
                main { (content) }
                footer.site-footer {}
            }
        }
    }
}

/// Body of a per-bucket gallery page: photo entries, then video entries.
pub fn bucket_body(date: &str, photos: &[PhotoEntry], videos: &[String]) -> Markup {
    html! {
        h2.bucket-date { (date) }
        @for photo in photos {
            div.entry {
                p.formats {
                    @if let Some(raw) = &photo.raw_name {
                        a.format href={ (FileKind::RawPhoto.dir_name()) "/" (raw) } { "[ RAW ]" }
                    } @else {
                        span.format.disabled { "[ RAW ]" }
                    }
                    " "
                    a.format href={ (FileKind::Photo.dir_name()) "/" (photo.file_name) } { "[ JPG ]" }
                }
                a href={ (FileKind::Photo.dir_name()) "/" (photo.file_name) } {
                    img src={ (THUMBS_DIR) "/" (photo.file_name) } alt=(photo.file_name);
                }
            }
        }
        @for video in videos {
            div.entry.video {
                h3 {
                    "VIDEO: "
                    a href={ (FileKind::Video.dir_name()) "/" (video) } { (video) }
                }
            }
        }
    }
}

/// Body of the site index: one summary row per bucket, newest first.
pub fn index_body(rows: &[(String, BucketInfo)]) -> Markup {
    html! {
        h1.site-title { "Photo Archive" }
        @for (date, info) in rows {
            div.bucket-row {
                h4 {
                    a href={ (date) "/" (GALLERY_FILE) } { (date) }
                    br;
                    span.bucket-title { (info.title.to_uppercase()) }
                    br;
                    span.bucket-description { (info.description) }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
