//! Output filename derivation for sized images.
//!
//! A resized copy of `name.ext` lands next to its source as
//! `name_{width}x{height}.ext`. The suffix makes the target size readable at
//! a glance and guarantees the derived path can never collide with the input,
//! so the original file is never overwritten.
//!
//! ## Examples
//!
//! - `assets/popup.jpg` + 640x400 → `assets/popup_640x400.jpg`
//! - `banner.png` + 1280x800 → `banner_1280x800.png`
//! - `notes` (no extension) + 100x100 → `notes_100x100`

use crate::imaging::TargetSize;
use std::path::{Path, PathBuf};

/// Derive the output path for a sized copy of `input`.
///
/// Inserts `_{width}x{height}` between the file stem and the extension,
/// keeping the directory. Extension-less inputs get the suffix appended.
pub fn sized_output_path(input: &Path, target: TargetSize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!("_{}x{}", target.width, target.height);

    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(file_name)
}
