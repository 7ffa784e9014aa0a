//! # Shoebox
//!
//! Ingests photos and videos from removable media into a date-bucketed
//! archive and keeps the archive browsable: bounded-box thumbnails, a
//! gallery page per day, and a site-wide index.
//!
//! # Architecture: Idempotent Pipeline
//!
//! A run is a fixed sequence of phases over the archive:
//!
//! ```text
//! 1. Cleanup     delete generated gallery pages and the site index
//! 2. Ingest      card → <archive>/<date>/<kind>/  (copy-if-absent)
//! 3. Thumbnails  render missing previews from archived photos
//! 4. Galleries   rebuild per-day pages + index from the archive tree
//! ```
//!
//! Every phase is safe to repeat. Files are copied only when their
//! destination path is vacant, thumbnails are rendered only when missing,
//! and the HTML is a materialized view rebuilt from scratch each pass — so
//! running the tool twice over an unchanged card changes nothing, and a
//! crash mid-run is repaired by the next invocation rather than rolled back.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks a tree and matches files by extension token |
//! | [`types`] | media kinds, per-file records, capture-date derivation |
//! | [`layout`] | bucket paths, directory management, bucket enumeration |
//! | [`ingest`] | copy-if-absent into buckets, fixed kind order |
//! | [`thumbs`] | bounded-box previews behind a backend trait |
//! | [`gallery`] | delete-then-rebuild HTML via Maud |
//! | [`run`] | phase sequencing for full and regenerate-only runs |
//! | [`config`] | immutable run configuration from TOML |
//! | [`output`] | console line formatting — pure functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Path Existence Is the Dedup Signal
//!
//! A file counts as already ingested when something exists at its
//! destination path. Contents are never hashed or compared: two distinct
//! files sharing a name keep only the first seen. The common case is a card
//! that has only grown since the last ingest, and for that case a re-run
//! touches nothing.
//!
//! ## Rebuild, Never Append
//!
//! Gallery HTML is deleted and regenerated wholesale from the archive tree.
//! Appending to existing pages would duplicate entries on every re-run;
//! rebuilding makes the output a function of the tree alone, so two
//! consecutive passes over an unchanged archive produce byte-identical
//! pages.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked, auto-escaped, and no template directory to ship or get out of
//! sync. The stylesheet is a static asset referenced by the generated
//! pages, not written by this tool.
//!
//! ## Strictly Sequential
//!
//! One thread, one process, blocking I/O. The archive contract is
//! single-invocation-at-a-time; idempotence rather than locking is what
//! makes interrupted runs recoverable.

pub mod config;
pub mod gallery;
pub mod ingest;
pub mod layout;
pub mod output;
pub mod run;
pub mod scan;
pub mod thumbs;
pub mod types;
