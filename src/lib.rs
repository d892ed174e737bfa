//! # fitcrop
//!
//! Resize and crop images to exact pixel dimensions, one file at a time or
//! in batches.
//!
//! Images are scaled uniformly until both dimensions are at least the target
//! ("cover" semantics, as opposed to "fit", which letterboxes), then cropped
//! to the exact size at an anchor (the top-left corner or the center). The
//! aspect mismatch between source and target is absorbed by cropping, never
//! by stretching. Output lands next to the input as
//! `name_{width}x{height}.ext`; the input file is never modified.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust image operations: cover resize, anchored crop, backend trait |
//! | [`naming`] | `name_{width}x{height}.ext` output path derivation |
//! | [`batch`] | Sequential batch driver with per-item outcomes |
//! | [`config`] | TOML `[[job]]` list loading and validation |
//! | [`output`] | CLI output formatting — pure format functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) with
//! its pure-Rust decoders for JPEG, PNG, TIFF, and WebP. This eliminates
//! system dependencies entirely: no `apt install`, no Homebrew, no version
//! conflicts. The binary is fully self-contained.
//!
//! ## Backend Trait
//!
//! Pixel work sits behind the [`imaging::ImageBackend`] trait. Batch and
//! operation logic is exercised against a recording mock, so the test suite
//! covers ordering, skipping, and error flow without encoding a single image.
//!
//! ## Closed Anchor Enum
//!
//! The crop anchor is a two-variant enum matched exhaustively. Invalid anchor
//! names can only be observed at the parsing boundary (a CLI argument or a
//! config value), where they fail before any image work happens.
//!
//! ## Batch Never Aborts
//!
//! The batch driver records a per-item outcome (resized, missing, failed) and
//! keeps going. A long job list with one corrupt file in the middle still
//! produces every other output, and the process exits 0 with the failures
//! visible in the report rather than the exit code.

pub mod batch;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
