//! End-to-end pipeline scenarios over a temporary card and archive.
//!
//! These drive the real orchestrator — real JPEG fixtures, real thumbnail
//! encoding — and assert the idempotence properties the archive depends on:
//! re-runs copy nothing, thumbnails survive re-ingestion, and regeneration
//! converges to byte-identical HTML.

use chrono::{Local, TimeZone};
use shoebox::config::{Config, TokenConfig};
use shoebox::ingest;
use shoebox::run::{self, RunMode};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

fn test_config(card: &Path, archive: &Path) -> Config {
    Config {
        source_root: card.to_path_buf(),
        archive_root: archive.to_path_buf(),
        tokens: TokenConfig::default(),
    }
}

fn set_mtime(path: &Path, (y, m, d): (i32, u32, u32)) {
    let noon = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::from(noon)).unwrap();
}

/// Write a small real JPEG and pin its modification time to local noon on
/// the given date.
fn write_photo(path: &Path, ymd: (i32, u32, u32)) {
    let img = image::RgbImage::from_pixel(32, 24, image::Rgb([120, 80, 40]));
    img.save(path).unwrap();
    set_mtime(path, ymd);
}

fn write_file(path: &Path, content: &[u8], ymd: (i32, u32, u32)) {
    fs::write(path, content).unwrap();
    set_mtime(path, ymd);
}

#[test]
fn first_run_ingests_thumbnails_and_renders() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    let bucket = archive.path().join("2024-05-01");
    assert!(bucket.join("photo/IMG001.JPG").is_file());
    assert!(bucket.join("thumbnails/IMG001.JPG").is_file());

    let gallery = fs::read_to_string(bucket.join("gallery.html")).unwrap();
    assert!(gallery.contains(r#"href="photo/IMG001.JPG""#));
    assert!(gallery.contains(r#"src="thumbnails/IMG001.JPG""#));
    // No companion raw: the marker is rendered but is not a link
    assert!(gallery.contains("[ RAW ]"));
    assert!(!gallery.contains(r#"href="rawPhoto/"#));

    let index = fs::read_to_string(archive.path().join("index.html")).unwrap();
    assert!(index.contains(r#"href="2024-05-01/gallery.html""#));
}

#[test]
fn adding_a_raw_companion_activates_the_raw_link() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    let bucket = archive.path().join("2024-05-01");
    let photo = bucket.join("photo/IMG001.JPG");
    let thumb = bucket.join("thumbnails/IMG001.JPG");
    let photo_before = (
        fs::read(&photo).unwrap(),
        fs::metadata(&photo).unwrap().modified().unwrap(),
    );
    let thumb_before = (
        fs::read(&thumb).unwrap(),
        fs::metadata(&thumb).unwrap().modified().unwrap(),
    );

    write_file(&card.path().join("IMG001.ARW"), b"raw payload", (2024, 5, 1));
    run::run(&config, RunMode::Full).unwrap();

    assert!(bucket.join("rawPhoto/IMG001.ARW").is_file());
    let gallery = fs::read_to_string(bucket.join("gallery.html")).unwrap();
    assert!(gallery.contains(r#"href="rawPhoto/IMG001.ARW""#));

    // The photo and its thumbnail were not re-copied or re-rendered
    let photo_after = (
        fs::read(&photo).unwrap(),
        fs::metadata(&photo).unwrap().modified().unwrap(),
    );
    let thumb_after = (
        fs::read(&thumb).unwrap(),
        fs::metadata(&thumb).unwrap().modified().unwrap(),
    );
    assert_eq!(photo_before, photo_after);
    assert_eq!(thumb_before, thumb_after);
}

#[test]
fn rerun_with_no_new_files_copies_nothing() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    write_file(&card.path().join("CLIP001.MP4"), b"mpeg4 payload", (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    let report = ingest::ingest(&config).unwrap();
    assert_eq!(report.copied, 0);
    assert_eq!(report.skipped, 2);
}

#[test]
fn regeneration_converges_to_identical_bytes() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    write_file(&card.path().join("IMG001.ARW"), b"raw payload", (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();
    let bucket = archive.path().join("2024-05-01");
    let gallery = fs::read(bucket.join("gallery.html")).unwrap();
    let index = fs::read(archive.path().join("index.html")).unwrap();

    run::run(&config, RunMode::Full).unwrap();
    assert_eq!(fs::read(bucket.join("gallery.html")).unwrap(), gallery);
    assert_eq!(fs::read(archive.path().join("index.html")).unwrap(), index);
}

#[test]
fn regenerate_only_never_reads_the_card() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    // The card is gone; a regenerate-only pass must still succeed
    drop(card);
    run::run(&config, RunMode::RegenerateOnly).unwrap();

    let bucket = archive.path().join("2024-05-01");
    assert!(bucket.join("photo/IMG001.JPG").is_file());
    assert!(bucket.join("thumbnails/IMG001.JPG").is_file());
    assert!(bucket.join("gallery.html").is_file());
    assert!(archive.path().join("index.html").is_file());
}

#[test]
fn regenerate_only_rebuilds_html_from_current_tree() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    // A photo dropped into the bucket by hand shows up after regeneration
    let bucket = archive.path().join("2024-05-01");
    write_photo(&bucket.join("photo/IMG099.JPG"), (2024, 5, 1));
    fs::write(bucket.join("info.txt"), "Lake day\nFirst swim of the year\n").unwrap();

    run::run(&config, RunMode::RegenerateOnly).unwrap();

    let gallery = fs::read_to_string(bucket.join("gallery.html")).unwrap();
    assert!(gallery.contains(r#"href="photo/IMG099.JPG""#));
    assert!(bucket.join("thumbnails/IMG099.JPG").is_file());

    let index = fs::read_to_string(archive.path().join("index.html")).unwrap();
    assert!(index.contains("LAKE DAY"));
    assert!(index.contains("First swim of the year"));
}

#[test]
fn index_lists_buckets_newest_first() {
    let card = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();
    write_photo(&card.path().join("IMG001.JPG"), (2024, 5, 1));
    write_photo(&card.path().join("IMG002.JPG"), (2024, 6, 15));
    let config = test_config(card.path(), archive.path());

    run::run(&config, RunMode::Full).unwrap();

    let index = fs::read_to_string(archive.path().join("index.html")).unwrap();
    let newer = index.find("2024-06-15").unwrap();
    let older = index.find("2024-05-01").unwrap();
    assert!(newer < older);
}
